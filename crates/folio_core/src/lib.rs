//! Core domain logic for the Folio portfolio site.
//! This crate is the single source of truth for portfolio state and the
//! UI state machines the host renders.

pub mod config;
pub mod content;
pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use config::{ConfigError, FolioConfig};
pub use content::feed::{default_feed, FeedPost, FeedSection};
pub use content::profile::{SiteProfile, SocialKind, SocialLink};
pub use logging::{default_log_level, init_logging, init_logging_with_config, logging_status};
pub use model::project::{Project, ProjectFields, ProjectId, ProjectPatch, RequiredField};
pub use store::project_store::{MemoryProjectStore, ProjectStore};
pub use store::seed::{seed_projects, seeded_store};
pub use view::form::{DraftField, FormError, FormInput, FormMode, FormOutcome, ProjectForm};
pub use view::grid::{ConfirmPrompt, PortfolioGrid, ProjectTile, DELETE_CONFIRMATION};
pub use view::keyboard::{
    lightbox_bindings, Key, KeyAction, KeyParseError, KeySubscription, KeyboardHub, ListenerId,
};
pub use view::lightbox::{LightboxEvent, ProjectLightbox, Slide};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
