//! Core domain logic for the project tracker.
//! This crate is the single source of truth for project state invariants.

pub mod logging;
pub mod model;
pub mod projection;
pub mod store;
pub mod validation;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::project::{
    Project, ProjectId, ProjectIdParseError, ProjectStatus, ProjectStatusParseError,
};
pub use projection::{filter_by_status, ListKind, Projection};
pub use store::listeners::{ListenerRegistry, NotifyReport, SubscriptionId};
pub use store::project_store::{ProjectStore, Snapshot};
pub use validation::{InputRules, ProjectInput, ValidProject, Validatable, ValidationError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
