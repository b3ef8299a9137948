//! Core progression engine for LifeQuest.
//! This crate is the single source of truth for progression invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod progression;
pub mod repo;
pub mod service;

pub use config::{ConfigError, SessionConfig, DEFAULT_USER_NAME};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::badge::{BadgeId, BadgeRule, BadgeStat, BadgeTier, BADGE_CATALOG};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use model::user::User;
pub use progression::badges::evaluate_badges;
pub use progression::leveling::{level_from_xp, LevelProgress};
pub use progression::streak::{update_streak, StreakUpdate};
pub use repo::task_repo::{
    CompletionResult, InMemoryTaskRepository, RepoError, RepoResult, TaskListQuery,
    TaskRepository,
};
pub use service::clock::{Clock, FixedClock, SystemClock};
pub use service::progression_service::{
    coins_for_xp, ProgressionError, ProgressionResult, ProgressionService, ServiceResult,
    SAMPLE_TASKS,
};

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
