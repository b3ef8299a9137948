//! Session user model.
//!
//! # Responsibility
//! - Hold the progression stats of the single session user.
//! - Degrade malformed stored timestamps to "no prior completion".
//!
//! # Invariants
//! - `badges` has no duplicates and only grows until `reset()`.
//! - `reset()` preserves `name` and nothing else.

use crate::model::badge::BadgeId;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Progression state of the session user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub xp: u64,
    pub coins: u64,
    /// Local timestamp of the most recent completion.
    #[serde(default, deserialize_with = "deserialize_lenient_timestamp")]
    pub last_complete_date: Option<NaiveDateTime>,
    /// Consecutive calendar days with at least one completion.
    pub streak: u32,
    /// Unlocked badges in unlock order.
    #[serde(default)]
    pub badges: Vec<BadgeId>,
}

impl User {
    /// Creates a user with zero-valued stats.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            xp: 0,
            coins: 0,
            last_complete_date: None,
            streak: 0,
            badges: Vec::new(),
        }
    }

    pub fn has_badge(&self, id: BadgeId) -> bool {
        self.badges.contains(&id)
    }

    /// Reinitializes every stat, keeping only the name.
    pub fn reset(&mut self) {
        *self = Self::new(std::mem::take(&mut self.name));
    }
}

/// Stored shape of `last_complete_date`; non-string values are skipped.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredTimestamp {
    Text(String),
    Other(IgnoredAny),
}

/// Accepts ISO-8601 timestamps or bare dates; anything else becomes `None`.
fn deserialize_lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let stored = Option::<StoredTimestamp>::deserialize(deserializer)?;
    Ok(match stored {
        Some(StoredTimestamp::Text(raw)) => parse_timestamp(&raw),
        Some(StoredTimestamp::Other(_)) | None => None,
    })
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if let Ok(timestamp) = trimmed.parse::<NaiveDateTime>() {
        return Some(timestamp);
    }
    trimmed
        .parse::<NaiveDate>()
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::parse_timestamp;

    #[test]
    fn parse_timestamp_accepts_datetime_and_date() {
        assert!(parse_timestamp("2026-02-13T10:00:00").is_some());
        assert!(parse_timestamp("2026-02-13T10:00:00.123456").is_some());
        assert!(parse_timestamp(" 2026-02-13 ").is_some());
    }

    #[test]
    fn parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2026-13-45").is_none());
        assert!(parse_timestamp("").is_none());
    }
}
