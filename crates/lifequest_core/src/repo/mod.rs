//! Task store abstractions and in-memory implementation.
//!
//! # Responsibility
//! - Define use-case oriented task access contracts.
//! - Keep storage details out of progression orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Task::validate()` before storing.
//! - Repository APIs return semantic errors (`NotFound`) for unknown ids.

pub mod task_repo;
