//! Task repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide create/list/complete/delete APIs over the session task list.
//! - Enforce the once-per-calendar-date completion rule.
//!
//! # Invariants
//! - List order is creation order.
//! - Tombstoned tasks are invisible to `complete_task` and default listings.
//! - A completion that was already recorded for the date never mutates state.

use crate::model::task::{Task, TaskId, TaskValidationError};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(TaskValidationError),
    NotFound(TaskId),
    DuplicateId(TaskId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::DuplicateId(id) => write!(f, "task already exists: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) => None,
        }
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Query options for listing tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskListQuery {
    pub include_deleted: bool,
}

/// Outcome of recording a completion in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionResult {
    pub already_completed_today: bool,
    /// Task XP on a fresh completion, `0` otherwise.
    pub xp_awarded: u32,
}

/// Repository interface for task operations.
pub trait TaskRepository {
    fn create_task(&mut self, task: Task) -> RepoResult<TaskId>;
    fn get_task(&self, id: TaskId, include_deleted: bool) -> RepoResult<Option<Task>>;
    fn list_tasks(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>>;
    fn complete_task(&mut self, id: TaskId, today: NaiveDate) -> RepoResult<CompletionResult>;
    fn soft_delete_task(&mut self, id: TaskId) -> RepoResult<()>;
}

/// Session-scoped task store backed by a `Vec` in creation order.
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn create_task(&mut self, task: Task) -> RepoResult<TaskId> {
        task.validate()?;

        if self.tasks.iter().any(|existing| existing.id == task.id) {
            return Err(RepoError::DuplicateId(task.id));
        }

        let id = task.id;
        self.tasks.push(task);
        Ok(id)
    }

    fn get_task(&self, id: TaskId, include_deleted: bool) -> RepoResult<Option<Task>> {
        Ok(self
            .tasks
            .iter()
            .find(|task| task.id == id && (include_deleted || task.is_active()))
            .cloned())
    }

    fn list_tasks(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>> {
        Ok(self
            .tasks
            .iter()
            .filter(|task| query.include_deleted || task.is_active())
            .cloned()
            .collect())
    }

    fn complete_task(&mut self, id: TaskId, today: NaiveDate) -> RepoResult<CompletionResult> {
        let task = self
            .find_mut(id)
            .filter(|task| task.is_active())
            .ok_or(RepoError::NotFound(id))?;

        if !task.mark_completed(today) {
            return Ok(CompletionResult {
                already_completed_today: true,
                xp_awarded: 0,
            });
        }

        Ok(CompletionResult {
            already_completed_today: false,
            xp_awarded: task.xp,
        })
    }

    fn soft_delete_task(&mut self, id: TaskId) -> RepoResult<()> {
        let task = self.find_mut(id).ok_or(RepoError::NotFound(id))?;
        task.soft_delete();
        Ok(())
    }
}
