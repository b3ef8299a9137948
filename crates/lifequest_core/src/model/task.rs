//! Task domain model.
//!
//! # Responsibility
//! - Define the task record completed by the user for XP and coins.
//! - Provide validation and lifecycle helpers for soft-delete semantics.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` is trimmed and never empty.
//! - `xp` is strictly positive.
//! - `completed_dates` holds at most one entry per calendar date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every task.
pub type TaskId = Uuid;

/// Validation failures for task records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Task id must not be the nil UUID.
    NilId,
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// XP reward must be greater than zero.
    NonPositiveXp,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be nil"),
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
            Self::NonPositiveXp => write!(f, "task xp must be greater than zero"),
        }
    }
}

impl Error for TaskValidationError {}

/// A user task that can be completed once per calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// XP granted for each completion.
    pub xp: u32,
    pub created: DateTime<Utc>,
    /// Calendar dates on which this task was completed.
    pub completed_dates: BTreeSet<NaiveDate>,
    /// Soft delete tombstone.
    pub is_deleted: bool,
}

/// Unvalidated wire shape; converted into `Task` through `validate()`.
#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    title: String,
    xp: u32,
    created: DateTime<Utc>,
    #[serde(default)]
    completed_dates: BTreeSet<NaiveDate>,
    #[serde(default)]
    is_deleted: bool,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(value: TaskRecord) -> Result<Self, Self::Error> {
        let task = Task {
            id: value.id,
            title: value.title,
            xp: value.xp,
            created: value.created,
            completed_dates: value.completed_dates,
            is_deleted: value.is_deleted,
        };
        task.validate()?;
        Ok(task)
    }
}

impl Task {
    /// Creates a new task with a generated id and the current UTC timestamp.
    ///
    /// The title is trimmed before validation.
    pub fn new(title: impl Into<String>, xp: u32) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), title, xp, Utc::now())
    }

    /// Creates a task with caller-provided identity and creation time.
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        xp: u32,
        created: DateTime<Utc>,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            title: title.into().trim().to_string(),
            xp,
            created,
            completed_dates: BTreeSet::new(),
            is_deleted: false,
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if self.xp == 0 {
            return Err(TaskValidationError::NonPositiveXp);
        }
        Ok(())
    }

    /// Returns whether this task was already completed on `date`.
    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completed_dates.contains(&date)
    }

    /// Records a completion for `date`.
    ///
    /// Returns `false` without mutation when the date is already recorded.
    pub fn mark_completed(&mut self, date: NaiveDate) -> bool {
        self.completed_dates.insert(date)
    }

    /// Marks this task as softly deleted (tombstoned).
    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
    }

    /// Returns whether this task should be considered visible/active.
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }
}
