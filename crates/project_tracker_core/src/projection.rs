//! Per-status list projections over store snapshots.
//!
//! # Responsibility
//! - Keep one filtered view of the store per list kind.
//! - Translate a drop onto a list into a store move.
//!
//! # Invariants
//! - A projection subscribes once and re-derives its list from every snapshot.
//! - Filtered lists keep store order.
//! - Projections mutate the store only through `move_project`.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::listeners::SubscriptionId;
use crate::store::project_store::{ProjectStore, Snapshot};
use std::cell::RefCell;
use std::rc::Rc;

/// Which category a projection shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Active,
    Finished,
}

impl ListKind {
    /// Status of the projects this list shows, and the move target for drops.
    pub fn status(self) -> ProjectStatus {
        match self {
            Self::Active => ProjectStatus::Active,
            Self::Finished => ProjectStatus::Finished,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE PROJECTS",
            Self::Finished => "FINISHED PROJECTS",
        }
    }
}

/// Returns the projects with `status`, in snapshot order.
pub fn filter_by_status(projects: &[Project], status: ProjectStatus) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| project.status == status)
        .cloned()
        .collect()
}

#[derive(Debug, Default)]
struct ProjectionState {
    projects: Vec<Project>,
    render_count: usize,
}

/// Filtered list view attached to one store.
pub struct Projection {
    kind: ListKind,
    subscription: SubscriptionId,
    state: Rc<RefCell<ProjectionState>>,
}

impl Projection {
    /// Subscribes a new projection of `kind` to `store`.
    ///
    /// The list starts from the store's current snapshot and is refreshed on
    /// every later notification.
    pub fn attach(kind: ListKind, store: &mut ProjectStore) -> Self {
        let state = Rc::new(RefCell::new(ProjectionState {
            projects: filter_by_status(&store.snapshot(), kind.status()),
            render_count: 0,
        }));

        let listener_state = Rc::clone(&state);
        let subscription = store.subscribe(move |snapshot: &Snapshot| {
            let mut state = listener_state.borrow_mut();
            state.projects = filter_by_status(snapshot, kind.status());
            state.render_count += 1;
        });

        Self {
            kind,
            subscription,
            state,
        }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Current filtered list.
    pub fn projects(&self) -> Vec<Project> {
        self.state.borrow().projects.clone()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().projects.is_empty()
    }

    /// Number of snapshots received since attaching.
    pub fn render_count(&self) -> usize {
        self.state.borrow().render_count
    }

    /// Handles a project dropped onto this list.
    pub fn accept_drop(&self, store: &mut ProjectStore, id: &ProjectId) {
        store.move_project(id, self.kind.status());
    }

    /// Stops receiving snapshots. The last list is kept.
    pub fn detach(&self, store: &mut ProjectStore) -> bool {
        store.unsubscribe(self.subscription)
    }
}
