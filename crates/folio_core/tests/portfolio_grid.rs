use folio_core::{
    DraftField, FolioConfig, FormError, FormMode, FormOutcome, Key, PortfolioGrid, ProjectId,
    ProjectStore, RequiredField,
};
use std::time::Duration;

fn grid() -> PortfolioGrid {
    PortfolioGrid::from_config(&FolioConfig::default())
}

fn ids(grid: &PortfolioGrid) -> Vec<String> {
    grid.tiles().into_iter().map(|tile| tile.id.to_string()).collect()
}

#[test]
fn tiles_follow_store_order() {
    let grid = grid();
    let tiles = grid.tiles();
    assert_eq!(ids(&grid), vec!["1", "2"]);
    assert_eq!(tiles[0].title, "Brand Identity - Eco Cafe");
    assert!(!tiles[1].thumbnail.is_empty());
}

#[test]
fn open_tile_shows_project_and_binds_keys() {
    let mut grid = grid();
    assert!(grid.open_tile(&ProjectId::from("2")));

    assert!(grid.lightbox().is_open());
    assert_eq!(grid.selected(), Some(&ProjectId::from("2")));
    assert_eq!(grid.keyboard().listener_count(), 1);
    assert!(!grid.open_tile(&ProjectId::from("missing")));
}

#[test]
fn arrow_keys_and_escape_reach_open_lightbox_only() {
    let mut grid = grid();
    assert!(!grid.handle_key(Key::ArrowRight));

    grid.view(&ProjectId::from("1"));
    assert!(grid.handle_key(Key::ArrowRight));
    assert_eq!(grid.lightbox().current_image_index(), 1);
    assert!(grid.handle_key(Key::ArrowRight));
    assert_eq!(grid.lightbox().current_image_index(), 0);
    assert!(grid.handle_key(Key::ArrowLeft));
    assert_eq!(grid.lightbox().current_image_index(), 1);
    assert!(!grid.handle_key(Key::Enter));

    assert!(grid.handle_key(Key::Escape));
    assert!(!grid.lightbox().is_open());
    assert_eq!(grid.keyboard().listener_count(), 0);
    assert!(!grid.handle_key(Key::ArrowRight));
}

#[test]
fn selection_clears_after_close_delay() {
    let mut grid = grid();
    grid.open_tile(&ProjectId::from("1"));
    grid.close_lightbox();

    assert!(grid.has_pending_clear());
    assert_eq!(grid.selected(), Some(&ProjectId::from("1")));
    assert!(grid.lightbox().project().is_some());

    grid.advance(Duration::from_millis(200));
    assert_eq!(grid.selected(), Some(&ProjectId::from("1")));

    grid.advance(Duration::from_millis(100));
    assert_eq!(grid.selected(), None);
    assert!(grid.lightbox().project().is_none());
    assert!(!grid.has_pending_clear());
}

#[test]
fn navigation_is_ignored_after_close() {
    let mut grid = grid();
    grid.open_tile(&ProjectId::from("1"));
    grid.lightbox_next();
    assert_eq!(grid.lightbox().current_image_index(), 1);

    grid.close_lightbox();
    assert!(grid.has_pending_clear());
    grid.lightbox_next();
    grid.lightbox_previous();
    grid.lightbox_previous();
    assert_eq!(grid.lightbox().current_image_index(), 1);
}

#[test]
fn reopening_before_delay_cancels_pending_clear() {
    let mut grid = grid();
    grid.open_tile(&ProjectId::from("1"));
    grid.close_lightbox();
    grid.open_tile(&ProjectId::from("2"));

    grid.advance(Duration::from_secs(1));
    assert_eq!(grid.selected(), Some(&ProjectId::from("2")));
    assert!(grid.lightbox().is_open());
}

#[test]
fn zero_delay_clears_immediately() {
    let mut grid = PortfolioGrid::from_config(&FolioConfig {
        lightbox_close_delay_ms: 0,
        ..FolioConfig::default()
    });
    grid.open_tile(&ProjectId::from("1"));
    grid.close_lightbox();
    assert_eq!(grid.selected(), None);
    assert!(!grid.has_pending_clear());
}

#[test]
fn lightbox_edit_closes_viewer_and_opens_edit_form() {
    let mut grid = grid();
    grid.open_tile(&ProjectId::from("2"));
    assert!(grid.lightbox_edit());

    assert!(!grid.lightbox().is_open());
    assert_eq!(grid.keyboard().listener_count(), 0);
    assert!(grid.form().is_open());
    assert_eq!(grid.form().mode(), FormMode::Edit);
    assert_eq!(
        grid.form().target().map(|project| project.id.clone()),
        Some(ProjectId::from("2"))
    );
    assert!(!grid.lightbox_edit());
}

#[test]
fn tile_edit_opens_form_for_project() {
    let mut grid = grid();
    assert!(grid.edit(&ProjectId::from("1")));
    assert_eq!(grid.form().mode(), FormMode::Edit);
    assert_eq!(grid.form().draft().title, "Brand Identity - Eco Cafe");
    assert!(!grid.edit(&ProjectId::from("missing")));
}

#[test]
fn scenario_edit_title_keeps_id() {
    let mut grid = grid();
    let id = ProjectId::from("1");
    grid.edit(&id);
    grid.form_mut().set_field(DraftField::Title, "Updated");

    assert_eq!(grid.submit_form(), Ok(FormOutcome::Updated(id.clone())));
    let stored = grid.store().get(&id).unwrap();
    assert_eq!(stored.fields.title, "Updated");
    assert_eq!(stored.id, id);
    assert!(!grid.form().is_open());
    assert!(grid.form().target().is_none());
}

#[test]
fn add_flow_prepends_new_tile() {
    let mut grid = grid();
    grid.open_add_form();
    assert_eq!(grid.form().mode(), FormMode::Add);
    assert!(grid.form().target().is_none());

    assert_eq!(
        grid.submit_form(),
        Err(FormError::MissingField(RequiredField::Title))
    );

    let form = grid.form_mut();
    form.set_field(DraftField::Title, "X");
    form.set_field(DraftField::Description, "d");
    form.set_field(DraftField::Concept, "c");
    form.set_image_input("u1");
    form.add_image();

    let Ok(FormOutcome::Created(created)) = grid.submit_form() else {
        panic!("add flow should create a project");
    };
    assert_eq!(ids(&grid)[0], created.id.to_string());
    assert_eq!(grid.store().len(), 3);
}

#[test]
fn cancel_form_discards_draft() {
    let mut grid = grid();
    grid.open_add_form();
    grid.form_mut().set_field(DraftField::Title, "Draft");
    grid.cancel_form();

    assert!(!grid.form().is_open());
    assert_eq!(grid.store().len(), 2);
}

#[test]
fn scenario_delete_requires_confirmation() {
    let mut grid = grid();
    let id = ProjectId::from("2");

    let mut decline = |_: &str| false;
    assert!(!grid.request_delete(&id, &mut decline));
    assert_eq!(ids(&grid), vec!["1", "2"]);

    let mut accept = |_: &str| true;
    assert!(grid.request_delete(&id, &mut accept));
    assert_eq!(ids(&grid), vec!["1"]);
    assert!(grid.store().get(&id).is_none());
}

#[test]
fn deleting_shown_project_closes_viewer() {
    let mut grid = grid();
    let id = ProjectId::from("1");
    grid.open_tile(&id);

    let mut accept = |_: &str| true;
    assert!(grid.request_delete(&id, &mut accept));
    assert!(!grid.lightbox().is_open());
    assert_eq!(grid.selected(), None);
    assert_eq!(grid.keyboard().listener_count(), 0);
}

#[test]
fn deleting_edited_project_cancels_form() {
    let mut grid = grid();
    let id = ProjectId::from("1");
    grid.edit(&id);

    let mut accept = |_: &str| true;
    grid.request_delete(&id, &mut accept);
    assert!(!grid.form().is_open());
    assert_eq!(grid.submit_form(), Err(FormError::Closed));
}
