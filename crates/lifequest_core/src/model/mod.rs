//! Domain model for tasks, the session user and the badge catalog.
//!
//! # Responsibility
//! - Define canonical data structures used by progression logic.
//! - Keep display styling out of the model; labels and tiers only.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion is represented by soft-delete tombstones, not hard delete.
//! - Badges held by a user are never revoked outside of an explicit reset.

pub mod badge;
pub mod task;
pub mod user;
