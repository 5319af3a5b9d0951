//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record shared by every list projection.
//! - Keep identity and status representation in one place.
//!
//! # Invariants
//! - Every project is identified by a stable, non-nil `ProjectId`.
//! - `status` is always exactly one of `ProjectStatus::{Active, Finished}`.

pub mod project;
