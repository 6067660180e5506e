//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `folio_core` linkage.
//! - Walk one scripted session so state wiring can be eyeballed quickly.
//! - Keep output deterministic for quick local sanity checks.

use folio_core::{DraftField, FolioConfig, FormInput, Key, PortfolioGrid, ProjectStore};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("folio_core ping={}", folio_core::ping());
    println!("folio_core version={}", folio_core::core_version());

    let config = match FolioConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let mut grid = PortfolioGrid::from_config(&config);
    print_tiles(&grid);

    if let Some(first) = grid.tiles().first() {
        let id = first.id.clone();
        grid.open_tile(&id);
        grid.handle_key(Key::ArrowRight);
        println!(
            "lightbox id={id} slide={}",
            grid.lightbox().counter_label().unwrap_or_else(|| "-".to_string())
        );
        grid.handle_key(Key::Escape);
        grid.advance(config.lightbox_close_delay());
        println!("lightbox open={} selected={:?}", grid.lightbox().is_open(), grid.selected());
    }

    grid.open_add_form();
    let form = grid.form_mut();
    form.set_field(DraftField::Title, "Smoke Project");
    form.set_field(DraftField::Description, "Created by the smoke CLI.");
    form.set_field(DraftField::Concept, "Linkage check.");
    form.set_image_input("https://example.invalid/smoke.jpg");
    form.handle_enter(FormInput::Image);
    match grid.submit_form() {
        Ok(outcome) => println!("form submit={outcome:?}"),
        Err(err) => {
            eprintln!("form submit failed: {err}");
            return ExitCode::FAILURE;
        }
    }
    print_tiles(&grid);

    let smoke_id = grid.tiles().first().map(|tile| tile.id.clone());
    if let Some(id) = smoke_id {
        let removed = grid.request_delete(&id, &mut |_: &str| true);
        println!("delete id={id} removed={removed}");
    }
    println!("projects={}", grid.store().len());
    ExitCode::SUCCESS
}

fn print_tiles(grid: &PortfolioGrid) {
    for tile in grid.tiles() {
        println!("tile id={} title={:?}", tile.id, tile.title);
    }
}
