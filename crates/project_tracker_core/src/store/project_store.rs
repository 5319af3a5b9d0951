//! Observable project store.
//!
//! # Responsibility
//! - Own the canonical, insertion-ordered project sequence.
//! - Apply `add` and `move` mutations and broadcast a snapshot after each.
//!
//! # Invariants
//! - Insertion order is creation order; status changes never reorder.
//! - Every successful mutation produces exactly one notification round.
//! - Moving to the current status, or moving an unknown id, is a silent
//!   no-op with no notification.
//! - Listeners only ever see `Snapshot`s, never the live sequence.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::listeners::{ListenerRegistry, NotifyReport, SubscriptionId};
use log::debug;
use std::sync::Arc;

/// Immutable ordered copy of all projects, taken at notification time.
///
/// One snapshot is built per round and shared by every listener of it.
pub type Snapshot = Arc<[Project]>;

type IdSource = Box<dyn FnMut() -> ProjectId>;

/// Result of resolving a move request against current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoveOutcome {
    Moved,
    AlreadyInStatus,
    UnknownId,
}

impl MoveOutcome {
    fn as_log_status(self) -> &'static str {
        match self {
            Self::Moved => "ok",
            Self::AlreadyInStatus => "noop",
            Self::UnknownId => "unknown_id",
        }
    }
}

/// The sole owner of project data and the subscriber list.
///
/// Constructed once by the application's composition root and handed to
/// consumers by reference; there is no global instance.
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: ListenerRegistry<Snapshot>,
    id_source: IdSource,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore {
    /// Creates an empty store with random UUID-backed ids.
    pub fn new() -> Self {
        Self::with_id_source(ProjectId::generate)
    }

    /// Creates an empty store that draws ids from `id_source`.
    ///
    /// The source must not repeat ids; collisions are not detected.
    pub fn with_id_source<F>(id_source: F) -> Self
    where
        F: FnMut() -> ProjectId + 'static,
    {
        Self {
            projects: Vec::new(),
            listeners: ListenerRegistry::new(),
            id_source: Box::new(id_source),
        }
    }

    /// Appends a new active project and notifies every listener.
    ///
    /// Field content must already be validated by the caller.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let id = (self.id_source)();
        self.projects
            .push(Project::with_id(id, title, description, people));

        let report = self.notify();
        debug!(
            "event=project_add module=store status=ok project_id={} delivered={} failed={}",
            id, report.delivered, report.failed
        );
        id
    }

    /// Moves one project to `target`.
    ///
    /// Unknown ids and same-status moves are absorbed without notifying.
    pub fn move_project(&mut self, id: &ProjectId, target: ProjectStatus) {
        let outcome = match self.projects.iter_mut().find(|project| project.id == *id) {
            None => MoveOutcome::UnknownId,
            Some(project) if project.status == target => MoveOutcome::AlreadyInStatus,
            Some(project) => {
                project.status = target;
                MoveOutcome::Moved
            }
        };

        if outcome == MoveOutcome::Moved {
            self.notify();
        }
        debug!(
            "event=project_move module=store status={} project_id={} target={}",
            outcome.as_log_status(),
            id,
            target
        );
    }

    /// Registers a listener for every future snapshot.
    ///
    /// Registering does not replay the current state; call `snapshot()` for
    /// that.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Returns a fresh copy of the current sequence.
    pub fn snapshot(&self) -> Snapshot {
        Arc::from(self.projects.as_slice())
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == *id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) -> NotifyReport {
        let snapshot = self.snapshot();
        self.listeners.notify(&snapshot)
    }
}
