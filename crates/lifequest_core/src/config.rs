//! Session configuration.
//!
//! # Responsibility
//! - Collect the knobs a front end needs to start a session.
//! - Validate them before logging or the service are initialized.
//!
//! # Invariants
//! - A validated config always has a non-blank user name.
//! - `log_dir`, when set, is absolute.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// User name of a fresh session when none is configured.
pub const DEFAULT_USER_NAME: &str = "Sairam";

/// Invalid session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyUserName,
    InvalidLogLevel(String),
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUserName => write!(f, "user name cannot be empty"),
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
            Self::RelativeLogDir(path) => {
                write!(f, "log_dir must be an absolute path, got `{}`", path.display())
            }
        }
    }
}

impl Error for ConfigError {}

/// Startup settings for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub user_name: String,
    pub log_level: String,
    /// File logging is disabled when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_name: DEFAULT_USER_NAME.to_string(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl SessionConfig {
    /// Checks the config and normalizes the user name and log level.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        let name = self.user_name.trim();
        if name.is_empty() {
            return Err(ConfigError::EmptyUserName);
        }
        self.user_name = name.to_string();
        self.log_level = normalize_level(&self.log_level)
            .map_err(ConfigError::InvalidLogLevel)?
            .to_string();

        if let Some(dir) = &self.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir.clone()));
            }
        }
        Ok(self)
    }
}
