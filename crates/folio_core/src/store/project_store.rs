//! Project store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide create/update/delete/lookup over the session's projects.
//! - Assign fresh ids on creation.
//!
//! # Invariants
//! - Ids are unique within the collection at all times.
//! - New projects are prepended; updates never reorder.
//! - Operations on unknown ids are no-ops, never errors.

use crate::model::project::{Project, ProjectFields, ProjectId, ProjectPatch};
use log::debug;
use uuid::Uuid;

/// Store interface consumed by the editor and the grid controller.
pub trait ProjectStore {
    /// Stores `fields` under a fresh id at the front of the collection.
    fn add(&mut self, fields: ProjectFields) -> Project;
    /// Merges `patch` into the matching project. Returns whether one matched.
    fn update(&mut self, id: &ProjectId, patch: ProjectPatch) -> bool;
    /// Removes the matching project. Returns whether one was removed.
    fn delete(&mut self, id: &ProjectId) -> bool;
    fn get(&self, id: &ProjectId) -> Option<&Project>;
    /// Newest-added first.
    fn list(&self) -> &[Project];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    fn contains(&self, id: &ProjectId) -> bool {
        self.get(id).is_some()
    }
}

/// Process-scoped project collection. Lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct MemoryProjectStore {
    projects: Vec<Project>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store holding `projects` in the given order.
    ///
    /// Later duplicates of an id are dropped so the uniqueness invariant
    /// holds from the start.
    pub fn with_projects(projects: impl IntoIterator<Item = Project>) -> Self {
        let mut store = Self::new();
        for project in projects {
            if store.contains(&project.id) {
                debug!(
                    "event=store_seed module=store status=skipped reason=duplicate_id id={}",
                    project.id
                );
                continue;
            }
            store.projects.push(project);
        }
        store
    }

    fn position(&self, id: &ProjectId) -> Option<usize> {
        self.projects.iter().position(|project| &project.id == id)
    }

    fn fresh_id(&self) -> ProjectId {
        loop {
            let candidate = ProjectId::new(Uuid::new_v4().to_string());
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }
}

impl ProjectStore for MemoryProjectStore {
    fn add(&mut self, fields: ProjectFields) -> Project {
        let project = Project::new(self.fresh_id(), fields);
        self.projects.insert(0, project.clone());
        debug!(
            "event=project_add module=store status=ok id={} total={}",
            project.id,
            self.projects.len()
        );
        project
    }

    fn update(&mut self, id: &ProjectId, patch: ProjectPatch) -> bool {
        let Some(index) = self.position(id) else {
            debug!("event=project_update module=store status=skipped reason=not_found id={id}");
            return false;
        };
        self.projects[index].apply(patch);
        debug!("event=project_update module=store status=ok id={id}");
        true
    }

    fn delete(&mut self, id: &ProjectId) -> bool {
        let Some(index) = self.position(id) else {
            debug!("event=project_delete module=store status=skipped reason=not_found id={id}");
            return false;
        };
        self.projects.remove(index);
        debug!(
            "event=project_delete module=store status=ok id={id} total={}",
            self.projects.len()
        );
        true
    }

    fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| &project.id == id)
    }

    fn list(&self) -> &[Project] {
        &self.projects
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryProjectStore, ProjectStore};
    use crate::model::project::{Project, ProjectFields, ProjectId};

    fn fields(title: &str) -> ProjectFields {
        ProjectFields {
            title: title.to_string(),
            ..ProjectFields::default()
        }
    }

    #[test]
    fn with_projects_drops_duplicate_ids() {
        let store = MemoryProjectStore::with_projects([
            Project::new(ProjectId::from("1"), fields("a")),
            Project::new(ProjectId::from("1"), fields("b")),
        ]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].title(), "a");
    }

    #[test]
    fn add_generates_non_empty_id() {
        let mut store = MemoryProjectStore::new();
        let project = store.add(fields("x"));
        assert!(!project.id.as_str().is_empty());
        assert!(store.contains(&project.id));
    }
}
