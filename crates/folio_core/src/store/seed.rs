//! Startup seed for the project collection.

use crate::model::project::{Project, ProjectFields, ProjectId};
use crate::store::project_store::MemoryProjectStore;

/// Returns the two projects every session starts with, ids `"1"` and `"2"`.
pub fn seed_projects() -> Vec<Project> {
    vec![
        Project::new(
            ProjectId::from("1"),
            ProjectFields {
                title: "Brand Identity - Eco Cafe".to_string(),
                thumbnail: "https://images.unsplash.com/photo-1583623025817-d180a2221d0a?w=1200&q=80"
                    .to_string(),
                images: vec![
                    "https://images.unsplash.com/photo-1583623025817-d180a2221d0a?w=1200&q=80"
                        .to_string(),
                    "https://images.unsplash.com/photo-1583623733044-f9a7d2b4be0a?w=1200&q=80"
                        .to_string(),
                ],
                tools: strings(&["Adobe Illustrator", "Adobe Photoshop", "Figma"]),
                description: "Complete brand identity design for an eco-friendly coffee shop."
                    .to_string(),
                concept: "The concept focused on sustainability and organic elements while \
                          maintaining a modern, clean aesthetic."
                    .to_string(),
                design_story: Some(
                    "This project began with extensive research into sustainable design practices."
                        .to_string(),
                ),
            },
        ),
        Project::new(
            ProjectId::from("2"),
            ProjectFields {
                title: "Mobile App UI Design".to_string(),
                thumbnail: "https://images.unsplash.com/photo-1555774698-0b77e0d5fac6?w=1200&q=80"
                    .to_string(),
                images: vec![
                    "https://images.unsplash.com/photo-1555774698-0b77e0d5fac6?w=1200&q=80"
                        .to_string(),
                    "https://images.unsplash.com/photo-1556155092-490a1ba16284?w=1200&q=80"
                        .to_string(),
                ],
                tools: strings(&["Figma", "Adobe XD", "Sketch"]),
                description: "UI/UX design for a fitness tracking mobile application.".to_string(),
                concept: "Created an intuitive interface that motivates users through \
                          gamification elements."
                    .to_string(),
                design_story: Some(
                    "The design process involved extensive user research and iterative \
                     prototyping."
                        .to_string(),
                ),
            },
        ),
    ]
}

/// Builds a store holding the seed set.
pub fn seeded_store() -> MemoryProjectStore {
    MemoryProjectStore::with_projects(seed_projects())
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
