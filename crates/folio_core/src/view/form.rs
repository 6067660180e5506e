//! Modal project editor.
//!
//! # Responsibility
//! - Stage a draft independently from the store (empty or copy-of-project).
//! - Edit the nested tool and image lists through two input buffers.
//! - Commit the draft to the store on submit.
//!
//! # Invariants
//! - Mode and backing project are fixed for one open session.
//! - Draft and buffers are reset on every open and after a successful submit.
//! - The draft's `tools` and `images` never contain duplicates.
//! - A closed form ignores every draft edit.
//! - Removing the thumbnail image re-points the thumbnail to the first
//!   remaining image, or clears it.

use crate::model::project::{Project, ProjectFields, ProjectId, ProjectPatch, RequiredField};
use crate::store::project_store::ProjectStore;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Whether the editor creates a new project or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Add,
    Edit,
}

impl FormMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Edit => "edit",
        }
    }
}

/// Plain text fields of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Thumbnail,
    Description,
    Concept,
    DesignStory,
}

/// Inputs that commit their buffer on Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormInput {
    Tool,
    Image,
}

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Created(Project),
    Updated(ProjectId),
}

/// Submit rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Submit was attempted while the editor is closed.
    Closed,
    /// A required field is blank.
    MissingField(RequiredField),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "project form is not open"),
            Self::MissingField(field) => write!(f, "required field is empty: {field}"),
        }
    }
}

impl Error for FormError {}

/// Editor state: open flag, mode, draft and input buffers.
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    open: bool,
    mode: FormMode,
    original: Option<Project>,
    draft: ProjectFields,
    tool_input: String,
    image_input: String,
}

impl ProjectForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens with an empty draft for a new project.
    pub fn open_add(&mut self) {
        self.reset();
        self.mode = FormMode::Add;
        self.open = true;
        debug!("event=form_open module=form status=ok mode=add");
    }

    /// Opens with a copy of `project` as the draft.
    pub fn open_edit(&mut self, project: &Project) {
        self.reset();
        self.mode = FormMode::Edit;
        self.draft = project.fields.clone();
        self.original = Some(project.clone());
        self.open = true;
        debug!(
            "event=form_open module=form status=ok mode=edit id={}",
            project.id
        );
    }

    /// Closes without persisting. The draft is discarded on next open.
    pub fn cancel(&mut self) {
        if self.open {
            debug!(
                "event=form_cancel module=form status=ok mode={}",
                self.mode.as_str()
            );
        }
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &ProjectFields {
        &self.draft
    }

    /// Project being edited; `None` in add mode.
    pub fn target(&self) -> Option<&Project> {
        self.original.as_ref()
    }

    pub fn tool_input(&self) -> &str {
        self.tool_input.as_str()
    }

    pub fn image_input(&self) -> &str {
        self.image_input.as_str()
    }

    pub fn title_label(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add New Project",
            FormMode::Edit => "Edit Project",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add Project",
            FormMode::Edit => "Update Project",
        }
    }

    /// Replaces one text field. Returns `false` on a closed form.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) -> bool {
        if !self.accepts_edits("set_field") {
            return false;
        }
        let value = value.into();
        match field {
            DraftField::Title => self.draft.title = value,
            DraftField::Thumbnail => self.draft.thumbnail = value,
            DraftField::Description => self.draft.description = value,
            DraftField::Concept => self.draft.concept = value,
            DraftField::DesignStory => {
                self.draft.design_story = if value.trim().is_empty() {
                    None
                } else {
                    Some(value)
                }
            }
        }
        true
    }

    /// Ignored on a closed form.
    pub fn set_tool_input(&mut self, value: impl Into<String>) {
        if self.accepts_edits("set_tool_input") {
            self.tool_input = value.into();
        }
    }

    /// Ignored on a closed form.
    pub fn set_image_input(&mut self, value: impl Into<String>) {
        if self.accepts_edits("set_image_input") {
            self.image_input = value.into();
        }
    }

    /// Appends the trimmed tool buffer. Returns whether a tool was added.
    ///
    /// Empty and duplicate entries are rejected and leave the buffer as is.
    pub fn add_tool(&mut self) -> bool {
        if !self.accepts_edits("add_tool") {
            return false;
        }
        let tool = self.tool_input.trim();
        if tool.is_empty() || self.draft.tools.iter().any(|existing| existing == tool) {
            return false;
        }
        self.draft.tools.push(tool.to_string());
        self.tool_input.clear();
        true
    }

    pub fn remove_tool(&mut self, tool: &str) -> bool {
        if !self.accepts_edits("remove_tool") {
            return false;
        }
        let before = self.draft.tools.len();
        self.draft.tools.retain(|existing| existing != tool);
        self.draft.tools.len() != before
    }

    /// Appends the trimmed image buffer. Returns whether an image was added.
    ///
    /// The first image added to a draft without thumbnail becomes the
    /// thumbnail.
    pub fn add_image(&mut self) -> bool {
        if !self.accepts_edits("add_image") {
            return false;
        }
        let url = self.image_input.trim();
        if url.is_empty() || self.draft.images.iter().any(|existing| existing == url) {
            return false;
        }
        let url = url.to_string();
        if !self.draft.has_thumbnail() {
            self.draft.thumbnail = url.clone();
        }
        self.draft.images.push(url);
        self.image_input.clear();
        true
    }

    pub fn remove_image(&mut self, url: &str) -> bool {
        if !self.accepts_edits("remove_image") {
            return false;
        }
        let before = self.draft.images.len();
        self.draft.images.retain(|existing| existing != url);
        if self.draft.images.len() == before {
            return false;
        }
        if self.draft.thumbnail == url {
            self.draft.thumbnail = self.draft.images.first().cloned().unwrap_or_default();
        }
        true
    }

    /// Makes a draft image the thumbnail. Urls outside `images` are ignored.
    pub fn set_thumbnail(&mut self, url: &str) -> bool {
        if !self.accepts_edits("set_thumbnail") {
            return false;
        }
        if !self.draft.images.iter().any(|existing| existing == url) {
            return false;
        }
        self.draft.thumbnail = url.to_string();
        true
    }

    /// Enter on a list input commits its buffer.
    pub fn handle_enter(&mut self, input: FormInput) -> bool {
        match input {
            FormInput::Tool => self.add_tool(),
            FormInput::Image => self.add_image(),
        }
    }

    /// Commits the draft to `store`, then closes and resets.
    ///
    /// # Errors
    /// - `FormError::Closed` when the editor is not open.
    /// - `FormError::MissingField` when a required field is blank; the
    ///   editor stays open with its draft intact.
    pub fn submit(&mut self, store: &mut impl ProjectStore) -> Result<FormOutcome, FormError> {
        if !self.open {
            return Err(FormError::Closed);
        }
        if let Some(field) = self.draft.missing_required() {
            info!(
                "event=form_submit module=form status=rejected reason=missing_field field={field}"
            );
            return Err(FormError::MissingField(field));
        }

        let draft = std::mem::take(&mut self.draft);
        let outcome = match (self.mode, self.original.take()) {
            (FormMode::Edit, Some(original)) => {
                let updated = store.update(&original.id, ProjectPatch::from(draft));
                info!(
                    "event=form_submit module=form status=ok mode=edit id={} matched={updated}",
                    original.id
                );
                FormOutcome::Updated(original.id)
            }
            _ => {
                let created = store.add(draft);
                info!(
                    "event=form_submit module=form status=ok mode=add id={}",
                    created.id
                );
                FormOutcome::Created(created)
            }
        };

        self.reset();
        Ok(outcome)
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn accepts_edits(&self, action: &str) -> bool {
        if !self.open {
            debug!("event=form_{action} module=form status=skipped reason=closed");
        }
        self.open
    }
}
