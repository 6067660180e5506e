use folio_core::{Project, ProjectFields, ProjectId};

fn sample() -> Project {
    Project::new(
        ProjectId::from("42"),
        ProjectFields {
            title: "Poster Series".to_string(),
            thumbnail: "https://img/1.png".to_string(),
            images: vec!["https://img/1.png".to_string()],
            tools: vec!["Figma".to_string()],
            description: "d".to_string(),
            concept: "c".to_string(),
            design_story: Some("s".to_string()),
        },
    )
}

#[test]
fn project_serialization_uses_camel_case_flat_fields() {
    let json = serde_json::to_value(sample()).unwrap();
    assert_eq!(json["id"], "42");
    assert_eq!(json["title"], "Poster Series");
    assert_eq!(json["designStory"], "s");
    assert_eq!(json["images"][0], "https://img/1.png");
    assert!(json.get("fields").is_none());
    assert!(json.get("design_story").is_none());

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, sample());
}

#[test]
fn missing_design_story_is_omitted_and_accepted() {
    let mut project = sample();
    project.fields.design_story = None;

    let json = serde_json::to_value(&project).unwrap();
    assert!(json.get("designStory").is_none());

    let value = serde_json::json!({
        "id": "7",
        "title": "t",
        "thumbnail": "",
        "images": [],
        "tools": [],
        "description": "d",
        "concept": "c"
    });
    let decoded: Project = serde_json::from_value(value).unwrap();
    assert_eq!(decoded.id, ProjectId::from("7"));
    assert_eq!(decoded.fields.design_story, None);
}
