//! In-memory project store and its notification mechanics.
//!
//! # Responsibility
//! - Own project state for one running application.
//! - Broadcast immutable snapshots to subscribed views after each mutation.
//!
//! # Invariants
//! - All mutations go through `ProjectStore::{add_project, move_project}`.
//! - Notification is synchronous and follows registration order.

pub mod listeners;
pub mod project_store;
