//! Portfolio grid controller.
//!
//! # Responsibility
//! - Compose the store, the editor and the viewer.
//! - Route tile gestures, key presses and viewer events.
//! - Gate deletion behind an explicit confirmation.
//!
//! # Invariants
//! - Delete never proceeds without an affirmative confirmation.
//! - At most one key listener is registered for the viewer.
//! - The deferred selection clear never drops a selection that was made
//!   after the viewer closed.

use crate::config::FolioConfig;
use crate::model::project::{Project, ProjectId};
use crate::store::project_store::{MemoryProjectStore, ProjectStore};
use crate::store::seed::seeded_store;
use crate::view::form::{FormError, FormOutcome, ProjectForm};
use crate::view::keyboard::{Key, KeyboardHub};
use crate::view::lightbox::{LightboxEvent, ProjectLightbox};
use log::{debug, info};
use std::time::Duration;

/// Prompt shown before a project is deleted.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this project?";

/// Host-provided blocking yes/no prompt.
pub trait ConfirmPrompt {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Grid cell projection of one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTile {
    pub id: ProjectId,
    pub title: String,
    pub thumbnail: String,
}

impl From<&Project> for ProjectTile {
    fn from(value: &Project) -> Self {
        Self {
            id: value.id.clone(),
            title: value.fields.title.clone(),
            thumbnail: value.fields.thumbnail.clone(),
        }
    }
}

pub struct PortfolioGrid<S: ProjectStore = MemoryProjectStore> {
    store: S,
    form: ProjectForm,
    lightbox: ProjectLightbox,
    keyboard: KeyboardHub,
    selected: Option<ProjectId>,
    /// Time left before the selection is dropped after a viewer close.
    pending_clear: Option<Duration>,
    close_delay: Duration,
}

impl PortfolioGrid<MemoryProjectStore> {
    /// Builds a session grid: seeded (or empty) store, fresh key hub.
    pub fn from_config(config: &FolioConfig) -> Self {
        let store = if config.seed_projects {
            seeded_store()
        } else {
            MemoryProjectStore::new()
        };
        Self::new(store, KeyboardHub::new(), config.lightbox_close_delay())
    }
}

impl<S: ProjectStore> PortfolioGrid<S> {
    pub fn new(store: S, keyboard: KeyboardHub, close_delay: Duration) -> Self {
        Self {
            store,
            form: ProjectForm::new(),
            lightbox: ProjectLightbox::new(),
            keyboard,
            selected: None,
            pending_clear: None,
            close_delay,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn form(&self) -> &ProjectForm {
        &self.form
    }

    /// Draft editing goes straight to the editor.
    pub fn form_mut(&mut self) -> &mut ProjectForm {
        &mut self.form
    }

    pub fn lightbox(&self) -> &ProjectLightbox {
        &self.lightbox
    }

    pub fn keyboard(&self) -> &KeyboardHub {
        &self.keyboard
    }

    pub fn selected(&self) -> Option<&ProjectId> {
        self.selected.as_ref()
    }

    pub fn has_pending_clear(&self) -> bool {
        self.pending_clear.is_some()
    }

    pub fn tiles(&self) -> Vec<ProjectTile> {
        self.store.list().iter().map(ProjectTile::from).collect()
    }

    /// Click on a tile: show the project in the viewer.
    pub fn open_tile(&mut self, id: &ProjectId) -> bool {
        let Some(project) = self.store.get(id).cloned() else {
            debug!("event=grid_open_tile module=grid status=skipped reason=not_found id={id}");
            return false;
        };
        self.pending_clear = None;
        self.selected = Some(project.id.clone());
        self.lightbox.open(project, &self.keyboard);
        true
    }

    /// "View" button on a tile; same as clicking it.
    pub fn view(&mut self, id: &ProjectId) -> bool {
        self.open_tile(id)
    }

    /// "Edit" button on a tile.
    pub fn edit(&mut self, id: &ProjectId) -> bool {
        let Some(project) = self.store.get(id).cloned() else {
            debug!("event=grid_edit module=grid status=skipped reason=not_found id={id}");
            return false;
        };
        self.close_lightbox();
        self.form.open_edit(&project);
        true
    }

    /// Edit request from the viewer: close it, then edit its project.
    pub fn lightbox_edit(&mut self) -> bool {
        let Some(LightboxEvent::EditRequested(shown)) = self.lightbox.request_edit() else {
            return false;
        };
        let project = self.store.get(&shown.id).cloned().unwrap_or(shown);
        self.close_lightbox();
        self.form.open_edit(&project);
        true
    }

    /// Closes the viewer and schedules the selection clear.
    pub fn close_lightbox(&mut self) {
        if !self.lightbox.is_open() {
            return;
        }
        self.lightbox.close();
        self.schedule_clear();
    }

    /// Ignored once the viewer is closed, even while its project lingers.
    pub fn lightbox_next(&mut self) {
        if self.lightbox.is_open() {
            self.lightbox.next();
        }
    }

    pub fn lightbox_previous(&mut self) {
        if self.lightbox.is_open() {
            self.lightbox.previous();
        }
    }

    /// Routes a window-level key press. Returns whether a listener took it.
    pub fn handle_key(&mut self, key: Key) -> bool {
        let Some((listener, action)) = self.keyboard.dispatch(key) else {
            return false;
        };
        if self.lightbox.key_listener() != Some(listener) {
            return false;
        }
        if let Some(LightboxEvent::Closed) = self.lightbox.handle_key(action) {
            self.schedule_clear();
        }
        true
    }

    /// Drives the deferred selection clear by `elapsed` host time.
    pub fn advance(&mut self, elapsed: Duration) {
        let Some(remaining) = self.pending_clear else {
            return;
        };
        if elapsed >= remaining {
            self.clear_selection();
        } else {
            self.pending_clear = Some(remaining - elapsed);
        }
    }

    /// Delete button on a tile. Returns whether the project was removed.
    pub fn request_delete(&mut self, id: &ProjectId, prompt: &mut dyn ConfirmPrompt) -> bool {
        if !self.store.contains(id) {
            debug!("event=grid_delete module=grid status=skipped reason=not_found id={id}");
            return false;
        }
        if !prompt.confirm(DELETE_CONFIRMATION) {
            info!("event=grid_delete module=grid status=skipped reason=declined id={id}");
            return false;
        }

        if self.selected.as_ref() == Some(id) {
            self.close_lightbox();
            self.clear_selection();
        }
        if self.form.target().map(|project| &project.id) == Some(id) {
            self.form.cancel();
        }
        let removed = self.store.delete(id);
        info!("event=grid_delete module=grid status=ok id={id} removed={removed}");
        removed
    }

    /// "Add Project" action.
    pub fn open_add_form(&mut self) {
        self.form.open_add();
    }

    /// Commits the editor draft to the store.
    pub fn submit_form(&mut self) -> Result<FormOutcome, FormError> {
        self.form.submit(&mut self.store)
    }

    pub fn cancel_form(&mut self) {
        self.form.cancel();
    }

    fn schedule_clear(&mut self) {
        if self.close_delay.is_zero() {
            self.clear_selection();
        } else {
            self.pending_clear = Some(self.close_delay);
        }
    }

    fn clear_selection(&mut self) {
        self.pending_clear = None;
        self.selected = None;
        self.lightbox.clear_project();
    }
}
