//! Read-only project viewer with an image carousel.
//!
//! # Responsibility
//! - Hold the displayed project and the carousel cursor.
//! - Own the arrow/escape key subscription while open.
//! - Report close and edit requests to the owning controller.
//!
//! # Invariants
//! - The cursor is reset to 0 whenever a project is (re)opened.
//! - Cursor arithmetic never runs on an empty image list.
//! - A key subscription exists if and only if the viewer is open.

use crate::model::project::Project;
use crate::view::keyboard::{
    lightbox_bindings, KeyAction, KeySubscription, KeyboardHub, ListenerId,
};
use log::debug;

const KEY_OWNER: &str = "lightbox";

/// Signals emitted to the owning controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxEvent {
    Closed,
    EditRequested(Project),
}

/// What the carousel area should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide<'a> {
    /// `position` is 1-based for display.
    Image {
        url: &'a str,
        position: usize,
        total: usize,
    },
    /// The project has no images.
    Placeholder,
}

#[derive(Debug, Default)]
pub struct ProjectLightbox {
    project: Option<Project>,
    current_image_index: usize,
    subscription: Option<KeySubscription>,
}

impl ProjectLightbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `project` from its first image and binds the carousel keys.
    pub fn open(&mut self, project: Project, keyboard: &KeyboardHub) {
        // Release first so a re-open never leaves two listeners behind.
        self.subscription = None;
        debug!(
            "event=lightbox_open module=lightbox status=ok id={} images={}",
            project.id,
            project.images().len()
        );
        self.project = Some(project);
        self.current_image_index = 0;
        self.subscription = Some(keyboard.subscribe(KEY_OWNER, lightbox_bindings()));
    }

    /// Closes the viewer and releases its key bindings.
    pub fn close(&mut self) -> LightboxEvent {
        if let Some(subscription) = self.subscription.take() {
            subscription.release();
            debug!("event=lightbox_close module=lightbox status=ok");
        }
        LightboxEvent::Closed
    }

    /// Asks the controller to edit the shown project.
    pub fn request_edit(&self) -> Option<LightboxEvent> {
        if !self.is_open() {
            return None;
        }
        self.project.clone().map(LightboxEvent::EditRequested)
    }

    pub fn is_open(&self) -> bool {
        self.subscription.is_some()
    }

    /// Last shown project; kept after close until the controller clears it.
    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    /// Drops the project snapshot. Used by the deferred selection clear.
    pub fn clear_project(&mut self) {
        if !self.is_open() {
            self.project = None;
            self.current_image_index = 0;
        }
    }

    pub fn current_image_index(&self) -> usize {
        self.current_image_index
    }

    pub fn key_listener(&self) -> Option<ListenerId> {
        self.subscription.as_ref().map(KeySubscription::id)
    }

    fn image_count(&self) -> usize {
        self.project
            .as_ref()
            .map(|project| project.images().len())
            .unwrap_or(0)
    }

    /// Advances the cursor, wrapping from the last image to the first.
    pub fn next(&mut self) {
        let count = self.image_count();
        if count == 0 {
            return;
        }
        self.current_image_index = (self.current_image_index + 1) % count;
    }

    /// Retreats the cursor, wrapping from the first image to the last.
    pub fn previous(&mut self) {
        let count = self.image_count();
        if count == 0 {
            return;
        }
        self.current_image_index = if self.current_image_index == 0 {
            count - 1
        } else {
            self.current_image_index - 1
        };
    }

    /// Applies a bound key action. Returns an event for `Close`.
    pub fn handle_key(&mut self, action: KeyAction) -> Option<LightboxEvent> {
        if !self.is_open() {
            return None;
        }
        match action {
            KeyAction::Previous => {
                self.previous();
                None
            }
            KeyAction::Next => {
                self.next();
                None
            }
            KeyAction::Close => Some(self.close()),
        }
    }

    pub fn slide(&self) -> Slide<'_> {
        let Some(project) = self.project.as_ref() else {
            return Slide::Placeholder;
        };
        match project.images().get(self.current_image_index) {
            Some(url) => Slide::Image {
                url: url.as_str(),
                position: self.current_image_index + 1,
                total: project.images().len(),
            },
            None => Slide::Placeholder,
        }
    }

    /// Previous/next controls are only shown for more than one image.
    pub fn shows_navigation(&self) -> bool {
        self.image_count() > 1
    }

    /// `"2 / 3"` style counter; `None` without images.
    pub fn counter_label(&self) -> Option<String> {
        match self.slide() {
            Slide::Image {
                position, total, ..
            } => Some(format!("{position} / {total}")),
            Slide::Placeholder => None,
        }
    }
}
