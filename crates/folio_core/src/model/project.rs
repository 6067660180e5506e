//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical portfolio entry shared by grid, form and lightbox.
//! - Provide the id-less field set used for creation and the partial patch
//!   used for updates.
//!
//! # Invariants
//! - `id` is assigned once by the store and never replaced by a patch.
//! - `tools` holds no duplicates (exact, case-sensitive match).
//! - A non-empty `thumbnail` should reference an entry of `images`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque, stable identifier of one project.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One portfolio work item.
///
/// Serialized with camelCase names to match the host-side schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    #[serde(flatten)]
    pub fields: ProjectFields,
}

impl Project {
    pub fn new(id: ProjectId, fields: ProjectFields) -> Self {
        Self { id, fields }
    }

    pub fn title(&self) -> &str {
        self.fields.title.as_str()
    }

    pub fn images(&self) -> &[String] {
        &self.fields.images
    }

    /// Applies every field set in `patch`. The id is untouched.
    pub fn apply(&mut self, patch: ProjectPatch) {
        self.fields.apply(patch);
    }
}

/// Project content without its identity.
///
/// Used as the draft shape of the editor and as `add` input of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFields {
    pub title: String,
    /// Representative image URL; empty when unset.
    pub thumbnail: String,
    /// Carousel order.
    pub images: Vec<String>,
    /// Insertion order is display order.
    pub tools: Vec<String>,
    pub description: String,
    pub concept: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_story: Option<String>,
}

impl ProjectFields {
    /// Returns the first required field that is blank, if any.
    ///
    /// Checked in display order: title, thumbnail, description, concept.
    pub fn missing_required(&self) -> Option<RequiredField> {
        [
            (RequiredField::Title, &self.title),
            (RequiredField::Thumbnail, &self.thumbnail),
            (RequiredField::Description, &self.description),
            (RequiredField::Concept, &self.concept),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }

    pub fn has_thumbnail(&self) -> bool {
        !self.thumbnail.is_empty()
    }

    pub fn apply(&mut self, patch: ProjectPatch) {
        let ProjectPatch {
            title,
            thumbnail,
            images,
            tools,
            description,
            concept,
            design_story,
        } = patch;

        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = thumbnail {
            self.thumbnail = value;
        }
        if let Some(value) = images {
            self.images = value;
        }
        if let Some(value) = tools {
            self.tools = value;
        }
        if let Some(value) = description {
            self.description = value;
        }
        if let Some(value) = concept {
            self.concept = value;
        }
        if let Some(value) = design_story {
            self.design_story = value;
        }
    }
}

/// Partial update for one project; `None` leaves a field untouched.
///
/// `design_story` is doubly optional: `Some(None)` clears the story.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub images: Option<Vec<String>>,
    pub tools: Option<Vec<String>>,
    pub description: Option<String>,
    pub concept: Option<String>,
    pub design_story: Option<Option<String>>,
}

impl ProjectPatch {
    pub fn title(value: impl Into<String>) -> Self {
        Self {
            title: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<ProjectFields> for ProjectPatch {
    /// Full replacement of every content field.
    fn from(value: ProjectFields) -> Self {
        Self {
            title: Some(value.title),
            thumbnail: Some(value.thumbnail),
            images: Some(value.images),
            tools: Some(value.tools),
            description: Some(value.description),
            concept: Some(value.concept),
            design_story: Some(value.design_story),
        }
    }
}

/// Fields that must be non-blank before a draft may be committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Title,
    Thumbnail,
    Description,
    Concept,
}

impl RequiredField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Thumbnail => "thumbnail",
            Self::Description => "description",
            Self::Concept => "concept",
        }
    }
}

impl Display for RequiredField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
