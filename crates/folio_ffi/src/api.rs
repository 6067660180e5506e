//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the portfolio session for the host UI thread.
//! - Keep error semantics simple: response envelopes, never exceptions.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every call runs synchronously on the host UI thread; the session is
//!   thread-local and never shared.
//! - The host renders snapshots; it never mutates portfolio state itself.

use folio_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    init_logging_with_config, ping as ping_inner, DraftField, FeedSection, FolioConfig, FormOutcome, Key, PortfolioGrid, Project,
    ProjectId, ProjectStore, SiteProfile, Slide,
};
use log::{info, warn};
use std::cell::RefCell;
use std::time::Duration;

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

struct Session {
    config: FolioConfig,
    grid: PortfolioGrid,
}

impl Session {
    fn new(config: FolioConfig) -> Self {
        let grid = PortfolioGrid::from_config(&config);
        Self { config, grid }
    }
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive), or
///   blank to use the session config's level.
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let result = if level.trim().is_empty() {
        let config = with_config(FolioConfig::clone);
        init_logging_with_config(&config, log_dir.as_str())
    } else {
        init_logging_inner(level.as_str(), log_dir.as_str())
    };
    match result {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Replaces the session with one built from a partial JSON config.
///
/// Keys: `log_level`, `lightbox_close_delay_ms`, `seed_projects`; missing
/// keys keep their defaults.
///
/// # FFI contract
/// - On success all portfolio state is reset (store, form, lightbox).
/// - On failure the current session is kept untouched.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_session(json: String) -> ActionResponse {
    let config = match FolioConfig::from_json(json.as_str()) {
        Ok(config) => config,
        Err(err) => {
            warn!("event=session_configure module=ffi status=error reason={err}");
            return ActionResponse::failure(format!("configure_session failed: {err}"));
        }
    };
    info!(
        "event=session_configure module=ffi status=ok level={} close_delay_ms={} seed={}",
        config.log_level, config.lightbox_close_delay_ms, config.seed_projects
    );
    SESSION.with(|cell| *cell.borrow_mut() = Some(Session::new(config)));
    ActionResponse::success("Session configured.", None)
}

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTileDto {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
}

/// Full project view for detail screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDto {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub images: Vec<String>,
    pub tools: Vec<String>,
    pub description: String,
    pub concept: String,
    pub design_story: Option<String>,
}

/// Editor state the host renders while the form dialog is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub is_open: bool,
    /// `add|edit`.
    pub mode: String,
    pub dialog_title: String,
    pub submit_label: String,
    pub target_id: Option<String>,
    pub title: String,
    pub thumbnail: String,
    pub images: Vec<String>,
    pub tools: Vec<String>,
    pub description: String,
    pub concept: String,
    pub design_story: String,
    pub tool_input: String,
    pub image_input: String,
}

/// Viewer state the host renders while the lightbox is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxSnapshot {
    pub is_open: bool,
    pub project: Option<ProjectDto>,
    pub current_image_index: u32,
    /// `None` means the placeholder is rendered.
    pub current_image: Option<String>,
    pub counter_label: Option<String>,
    pub shows_navigation: bool,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Project the action produced or touched.
    pub project_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, project_id: Option<String>) -> Self {
        Self {
            ok: true,
            project_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            project_id: None,
            message: message.into(),
        }
    }

    fn from_flag(ok: bool, success: &str, failure: &str) -> Self {
        if ok {
            Self::success(success, None)
        } else {
            Self::failure(failure)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLinkDto {
    /// `instagram|email|linkedin`.
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteProfileDto {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub avatar_url: String,
    pub about: Vec<String>,
    pub skills: Vec<String>,
    pub quote: String,
    pub mailto_url: String,
    pub social_links: Vec<SocialLinkDto>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPostDto {
    pub id: String,
    pub image_url: String,
    pub caption: String,
    pub likes: u32,
    pub comments: u32,
    pub project_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSectionDto {
    pub title: String,
    pub subtitle: String,
    pub profile_url: String,
    pub posts: Vec<FeedPostDto>,
}

/// Lists grid tiles, newest first.
#[flutter_rust_bridge::frb(sync)]
pub fn portfolio_tiles() -> Vec<ProjectTileDto> {
    with_session(|grid| {
        grid.tiles()
            .into_iter()
            .map(|tile| ProjectTileDto {
                id: tile.id.to_string(),
                title: tile.title,
                thumbnail: tile.thumbnail,
            })
            .collect()
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn portfolio_get(id: String) -> Option<ProjectDto> {
    with_session(|grid| grid.store().get(&ProjectId::from(id)).map(to_project_dto))
}

/// Tile click or "View": opens the lightbox.
#[flutter_rust_bridge::frb(sync)]
pub fn portfolio_open_tile(id: String) -> ActionResponse {
    with_session(|grid| {
        ActionResponse::from_flag(
            grid.open_tile(&ProjectId::from(id)),
            "Lightbox opened.",
            "Project not found.",
        )
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn portfolio_open_add_form() {
    with_session(|grid| grid.open_add_form())
}

/// Tile "Edit": opens the form for the project.
#[flutter_rust_bridge::frb(sync)]
pub fn portfolio_open_edit_form(id: String) -> ActionResponse {
    with_session(|grid| {
        ActionResponse::from_flag(
            grid.edit(&ProjectId::from(id)),
            "Form opened.",
            "Project not found.",
        )
    })
}

/// Tile "Delete".
///
/// # FFI contract
/// - The host shows its blocking confirmation dialog first and passes the
///   user's answer as `confirmed`.
/// - Deletes nothing unless `confirmed` is `true`.
#[flutter_rust_bridge::frb(sync)]
pub fn portfolio_delete(id: String, confirmed: bool) -> ActionResponse {
    with_session(|grid| {
        let id = ProjectId::from(id);
        if !grid.store().contains(&id) {
            return ActionResponse::failure("Project not found.");
        }
        let mut answer = |_: &str| confirmed;
        if grid.request_delete(&id, &mut answer) {
            ActionResponse::success("Project deleted.", Some(id.to_string()))
        } else {
            ActionResponse::failure("Delete cancelled.")
        }
    })
}

/// Reports elapsed host time so deferred work can run.
#[flutter_rust_bridge::frb(sync)]
pub fn portfolio_advance(elapsed_ms: u64) {
    with_session(|grid| grid.advance(Duration::from_millis(elapsed_ms)))
}

#[flutter_rust_bridge::frb(sync)]
pub fn form_snapshot() -> FormSnapshot {
    with_session(|grid| {
        let form = grid.form();
        let draft = form.draft();
        FormSnapshot {
            is_open: form.is_open(),
            mode: form.mode().as_str().to_string(),
            dialog_title: form.title_label().to_string(),
            submit_label: form.submit_label().to_string(),
            target_id: form.target().map(|project| project.id.to_string()),
            title: draft.title.clone(),
            thumbnail: draft.thumbnail.clone(),
            images: draft.images.clone(),
            tools: draft.tools.clone(),
            description: draft.description.clone(),
            concept: draft.concept.clone(),
            design_story: draft.design_story.clone().unwrap_or_default(),
            tool_input: form.tool_input().to_string(),
            image_input: form.image_input().to_string(),
        }
    })
}

/// Replaces one text field of the draft.
///
/// `field` is one of `title|thumbnail|description|concept|designStory`.
#[flutter_rust_bridge::frb(sync)]
pub fn form_set_field(field: String, value: String) -> ActionResponse {
    let Some(field) = parse_draft_field(field.as_str()) else {
        return ActionResponse::failure(format!("unknown form field: `{field}`"));
    };
    with_session(|grid| {
        ActionResponse::from_flag(
            grid.form_mut().set_field(field, value),
            "Field updated.",
            "Form is not open.",
        )
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn form_set_tool_input(value: String) {
    with_session(|grid| grid.form_mut().set_tool_input(value))
}

/// Commits the tool input (button or Enter).
#[flutter_rust_bridge::frb(sync)]
pub fn form_add_tool() -> bool {
    with_session(|grid| grid.form_mut().add_tool())
}

#[flutter_rust_bridge::frb(sync)]
pub fn form_remove_tool(tool: String) -> bool {
    with_session(|grid| grid.form_mut().remove_tool(tool.as_str()))
}

#[flutter_rust_bridge::frb(sync)]
pub fn form_set_image_input(value: String) {
    with_session(|grid| grid.form_mut().set_image_input(value))
}

/// Commits the image input (button or Enter).
#[flutter_rust_bridge::frb(sync)]
pub fn form_add_image() -> bool {
    with_session(|grid| grid.form_mut().add_image())
}

#[flutter_rust_bridge::frb(sync)]
pub fn form_remove_image(url: String) -> bool {
    with_session(|grid| grid.form_mut().remove_image(url.as_str()))
}

#[flutter_rust_bridge::frb(sync)]
pub fn form_set_thumbnail(url: String) -> bool {
    with_session(|grid| grid.form_mut().set_thumbnail(url.as_str()))
}

/// Submits the form.
///
/// # FFI contract
/// - On success the dialog is closed and `project_id` names the created or
///   updated project.
/// - On failure the dialog stays open and `message` names the problem.
#[flutter_rust_bridge::frb(sync)]
pub fn form_submit() -> ActionResponse {
    with_session(|grid| match grid.submit_form() {
        Ok(FormOutcome::Created(project)) => {
            ActionResponse::success("Project added.", Some(project.id.to_string()))
        }
        Ok(FormOutcome::Updated(id)) => {
            ActionResponse::success("Project updated.", Some(id.to_string()))
        }
        Err(err) => ActionResponse::failure(format!("form_submit failed: {err}")),
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn form_cancel() {
    with_session(|grid| grid.cancel_form())
}

#[flutter_rust_bridge::frb(sync)]
pub fn lightbox_snapshot() -> LightboxSnapshot {
    with_session(|grid| {
        let lightbox = grid.lightbox();
        let current_image = match lightbox.slide() {
            Slide::Image { url, .. } => Some(url.to_string()),
            Slide::Placeholder => None,
        };
        LightboxSnapshot {
            is_open: lightbox.is_open(),
            project: lightbox.project().map(to_project_dto),
            current_image_index: u32::try_from(lightbox.current_image_index())
                .unwrap_or(u32::MAX),
            current_image,
            counter_label: lightbox.counter_label(),
            shows_navigation: lightbox.shows_navigation(),
        }
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn lightbox_next() {
    with_session(|grid| grid.lightbox_next())
}

#[flutter_rust_bridge::frb(sync)]
pub fn lightbox_previous() {
    with_session(|grid| grid.lightbox_previous())
}

/// Close button or backdrop tap.
#[flutter_rust_bridge::frb(sync)]
pub fn lightbox_close() {
    with_session(|grid| grid.close_lightbox())
}

/// Edit button inside the lightbox: closes it and opens the edit form.
#[flutter_rust_bridge::frb(sync)]
pub fn lightbox_edit() -> bool {
    with_session(|grid| grid.lightbox_edit())
}

/// Forwards a window-level key press (`ArrowLeft|ArrowRight|Escape|Enter`).
///
/// Returns whether a registered listener consumed the key.
#[flutter_rust_bridge::frb(sync)]
pub fn key_press(key: String) -> bool {
    match Key::parse(key.as_str()) {
        Ok(key) => with_session(|grid| grid.handle_key(key)),
        Err(_) => false,
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn site_profile() -> SiteProfileDto {
    let profile = SiteProfile::default();
    SiteProfileDto {
        mailto_url: profile.mailto_url(),
        social_links: profile
            .social_links
            .iter()
            .map(|link| SocialLinkDto {
                kind: link.kind.as_str().to_string(),
                url: link.url.clone(),
            })
            .collect(),
        name: profile.name,
        role: profile.role,
        tagline: profile.tagline,
        avatar_url: profile.avatar_url,
        about: profile.about,
        skills: profile.skills,
        quote: profile.quote,
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn feed_section() -> FeedSectionDto {
    let section = FeedSection::default();
    FeedSectionDto {
        title: section.title,
        subtitle: section.subtitle,
        profile_url: section.profile_url,
        posts: section
            .posts
            .into_iter()
            .map(|post| FeedPostDto {
                id: post.id,
                image_url: post.image_url,
                caption: post.caption,
                likes: post.likes,
                comments: post.comments,
                project_url: post.project_url,
            })
            .collect(),
    }
}

fn with_session<T>(f: impl FnOnce(&mut PortfolioGrid) -> T) -> T {
    SESSION.with(|cell| {
        let mut session = cell.borrow_mut();
        f(&mut session.get_or_insert_with(new_session).grid)
    })
}

fn with_config<T>(f: impl FnOnce(&FolioConfig) -> T) -> T {
    SESSION.with(|cell| {
        let mut session = cell.borrow_mut();
        f(&session.get_or_insert_with(new_session).config)
    })
}

#[cfg(test)]
fn reset_session() {
    SESSION.with(|cell| cell.borrow_mut().take());
}

fn new_session() -> Session {
    let config = FolioConfig::from_env().unwrap_or_else(|err| {
        warn!("event=session_config module=ffi status=error reason={err}; using defaults");
        FolioConfig::default()
    });
    Session::new(config)
}

fn parse_draft_field(value: &str) -> Option<DraftField> {
    match value.trim() {
        "title" => Some(DraftField::Title),
        "thumbnail" => Some(DraftField::Thumbnail),
        "description" => Some(DraftField::Description),
        "concept" => Some(DraftField::Concept),
        "designStory" => Some(DraftField::DesignStory),
        _ => None,
    }
}

fn to_project_dto(project: &Project) -> ProjectDto {
    let fields = &project.fields;
    ProjectDto {
        id: project.id.to_string(),
        title: fields.title.clone(),
        thumbnail: fields.thumbnail.clone(),
        images: fields.images.clone(),
        tools: fields.tools.clone(),
        description: fields.description.clone(),
        concept: fields.concept.clone(),
        design_story: fields.design_story.clone(),
    }
}
