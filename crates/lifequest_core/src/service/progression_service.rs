//! Progression use-case service.
//!
//! # Responsibility
//! - Own the session state: the user and the task repository.
//! - Turn task completions into XP, coins, streak and badge updates.
//!
//! # Invariants
//! - A repeated completion on the same date has no side effects at all.
//! - Deleting a task never revokes XP or coins it already granted.
//! - `reset_progress` never touches the task repository.
//! - Log events carry ids and numbers only, never task titles.

use crate::model::badge::BadgeId;
use crate::model::task::{Task, TaskId, TaskValidationError};
use crate::model::user::User;
use crate::progression::badges::evaluate_badges;
use crate::progression::leveling::{level_from_xp, LevelProgress};
use crate::progression::streak::update_streak;
use crate::repo::task_repo::{RepoError, TaskListQuery, TaskRepository};
use crate::service::clock::{Clock, SystemClock};
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Tasks added by `prefill_sample_tasks`, as `(title, xp)`.
pub const SAMPLE_TASKS: [(&str, u32); 3] = [
    ("Study Python — 30m", 50),
    ("Exercise — 20m", 40),
    ("Read a chapter", 30),
];

pub type ServiceResult<T> = Result<T, ProgressionError>;

/// Service error for progression use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressionError {
    /// Task input was rejected; no state changed.
    Validation(TaskValidationError),
    /// Target task does not exist or was deleted.
    TaskNotFound(TaskId),
    /// Other store failure.
    Repo(RepoError),
}

impl Display for ProgressionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ProgressionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::TaskNotFound(_) => None,
        }
    }
}

impl From<TaskValidationError> for ProgressionError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ProgressionError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::NotFound(id) => Self::TaskNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Aggregate outcome of one completion, consumed for rendering feedback.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressionResult {
    pub xp_awarded: u32,
    pub coins_awarded: u64,
    /// Badges unlocked by this completion, in catalog order.
    pub new_badges: Vec<BadgeId>,
    /// Task was already completed on this date; nothing was awarded.
    pub already_done: bool,
}

/// Coins granted for a completion worth `xp`: one per ten XP, at least one.
pub fn coins_for_xp(xp: u32) -> u64 {
    u64::from(xp / 10).max(1)
}

/// Session facade over the user and a task repository.
pub struct ProgressionService<R: TaskRepository> {
    repo: R,
    user: User,
    clock: Box<dyn Clock>,
}

impl<R: TaskRepository> ProgressionService<R> {
    /// Creates a service for a fresh user named `user_name`.
    pub fn new(repo: R, user_name: impl Into<String>) -> Self {
        Self::with_clock(repo, User::new(user_name), Box::new(SystemClock))
    }

    /// Creates a service with an existing user and a custom clock.
    pub fn with_clock(repo: R, user: User, clock: Box<dyn Clock>) -> Self {
        Self { repo, user, clock }
    }

    /// Creates a task and returns the stored record.
    ///
    /// # Errors
    /// - `Validation` when the title is blank or `xp` is zero.
    pub fn add_task(&mut self, title: &str, xp: u32) -> ServiceResult<Task> {
        let task = Task::new(title, xp).map_err(|err| {
            warn!("event=task_add module=progression status=rejected reason={err:?}");
            err
        })?;
        let id = self.repo.create_task(task.clone())?;
        info!("event=task_add module=progression status=ok task_id={id} xp={xp}");
        Ok(task)
    }

    /// Lists active tasks in creation order.
    pub fn list_tasks(&self) -> ServiceResult<Vec<Task>> {
        Ok(self.repo.list_tasks(&TaskListQuery::default())?)
    }

    /// Completes a task for `today` and applies every reward.
    ///
    /// # Contract
    /// - Already completed on `today`: `already_done = true`, zero awards,
    ///   user untouched.
    /// - Otherwise: adds XP and `coins_for_xp(xp)` coins, advances the streak,
    ///   then evaluates badges.
    ///
    /// # Errors
    /// - `TaskNotFound` when `id` is unknown or deleted.
    pub fn complete_task(&mut self, id: TaskId, today: NaiveDate) -> ServiceResult<ProgressionResult> {
        let completion = self.repo.complete_task(id, today)?;
        if completion.already_completed_today {
            debug!("event=task_complete module=progression status=already_done task_id={id}");
            return Ok(ProgressionResult {
                already_done: true,
                ..ProgressionResult::default()
            });
        }

        let xp_awarded = completion.xp_awarded;
        let coins_awarded = coins_for_xp(xp_awarded);
        self.user.xp = self.user.xp.saturating_add(u64::from(xp_awarded));
        self.user.coins = self.user.coins.saturating_add(coins_awarded);

        let stamp = today.and_time(self.clock.now().time());
        let streak = update_streak(self.user.streak, self.user.last_complete_date, stamp);
        self.user.streak = streak.streak;
        self.user.last_complete_date = Some(streak.last_complete_date);

        let new_badges = evaluate_badges(&mut self.user);
        log_badge_unlocks(&new_badges);

        info!(
            "event=task_complete module=progression status=ok task_id={} xp_awarded={} coins_awarded={} streak={} new_badges={}",
            id,
            xp_awarded,
            coins_awarded,
            self.user.streak,
            new_badges.len()
        );
        Ok(ProgressionResult {
            xp_awarded,
            coins_awarded,
            new_badges,
            already_done: false,
        })
    }

    /// Completes a task using the date of the session clock.
    pub fn complete_task_now(&mut self, id: TaskId) -> ServiceResult<ProgressionResult> {
        let today = self.clock.now().date();
        self.complete_task(id, today)
    }

    /// Soft-deletes a task. Granted XP and coins are kept.
    ///
    /// # Errors
    /// - `TaskNotFound` when `id` is unknown.
    pub fn delete_task(&mut self, id: TaskId) -> ServiceResult<()> {
        self.repo.soft_delete_task(id)?;
        info!("event=task_delete module=progression status=ok task_id={id}");
        Ok(())
    }

    /// Resets the user to zero stats, keeping the name and all tasks.
    pub fn reset_progress(&mut self) {
        self.user.reset();
        info!("event=progress_reset module=progression status=ok");
    }

    /// Read-only view of the user for profile rendering.
    pub fn user_snapshot(&self) -> &User {
        &self.user
    }

    /// Level of the current user.
    pub fn level_progress(&self) -> LevelProgress {
        level_from_xp(self.user.xp)
    }

    /// Adds `SAMPLE_TASKS` when no active task exists, then evaluates badges.
    ///
    /// Returns the badges unlocked by the evaluation, or `None` without
    /// changes when tasks are already present.
    pub fn prefill_sample_tasks(&mut self) -> ServiceResult<Option<Vec<BadgeId>>> {
        if !self.list_tasks()?.is_empty() {
            debug!("event=sample_prefill module=progression status=skipped");
            return Ok(None);
        }

        for (title, xp) in SAMPLE_TASKS {
            self.add_task(title, xp)?;
        }
        let new_badges = evaluate_badges(&mut self.user);
        log_badge_unlocks(&new_badges);
        info!(
            "event=sample_prefill module=progression status=ok count={} new_badges={}",
            SAMPLE_TASKS.len(),
            new_badges.len()
        );
        Ok(Some(new_badges))
    }
}

fn log_badge_unlocks(badges: &[BadgeId]) {
    for badge in badges {
        info!("event=badge_unlock module=progression status=ok badge={badge}");
    }
}
