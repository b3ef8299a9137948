//! Static badge catalog.
//!
//! # Responsibility
//! - Enumerate every badge a user can unlock.
//! - Describe each unlock condition as plain data (stat + threshold).
//!
//! # Invariants
//! - `BADGE_CATALOG` order is the evaluation and reporting order.
//! - The catalog is fixed at compile time; it is not configurable at runtime.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identifier of a catalog badge.
///
/// Serialized with its stable kebab-case id (for example `streak-3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BadgeId {
    #[serde(rename = "streak-3")]
    Streak3,
    #[serde(rename = "streak-7")]
    Streak7,
    #[serde(rename = "xp-100")]
    Xp100,
    #[serde(rename = "xp-300")]
    Xp300,
    #[serde(rename = "coins-50")]
    Coins50,
    #[serde(rename = "coins-100")]
    Coins100,
}

/// Display tier of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTier {
    Bronze,
    Silver,
    Gold,
}

/// User statistic a badge rule is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStat {
    Streak,
    Xp,
    Coins,
}

/// One catalog entry: the badge unlocks once `stat >= threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeRule {
    pub id: BadgeId,
    pub stat: BadgeStat,
    pub threshold: u64,
}

/// Every badge, in definition order.
pub const BADGE_CATALOG: [BadgeRule; 6] = [
    BadgeRule {
        id: BadgeId::Streak3,
        stat: BadgeStat::Streak,
        threshold: 3,
    },
    BadgeRule {
        id: BadgeId::Streak7,
        stat: BadgeStat::Streak,
        threshold: 7,
    },
    BadgeRule {
        id: BadgeId::Xp100,
        stat: BadgeStat::Xp,
        threshold: 100,
    },
    BadgeRule {
        id: BadgeId::Xp300,
        stat: BadgeStat::Xp,
        threshold: 300,
    },
    BadgeRule {
        id: BadgeId::Coins50,
        stat: BadgeStat::Coins,
        threshold: 50,
    },
    BadgeRule {
        id: BadgeId::Coins100,
        stat: BadgeStat::Coins,
        threshold: 100,
    },
];

impl BadgeId {
    /// Stable kebab-case id used on the wire and in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Streak3 => "streak-3",
            Self::Streak7 => "streak-7",
            Self::Xp100 => "xp-100",
            Self::Xp300 => "xp-300",
            Self::Coins50 => "coins-50",
            Self::Coins100 => "coins-100",
        }
    }

    /// Parses a kebab-case badge id.
    pub fn parse(value: &str) -> Option<Self> {
        BADGE_CATALOG
            .iter()
            .map(|rule| rule.id)
            .find(|id| id.as_str() == value)
    }

    /// Human-readable label for profile rendering.
    pub fn label(self) -> &'static str {
        match self {
            Self::Streak3 => "3-Day Streak",
            Self::Streak7 => "7-Day Streak",
            Self::Xp100 => "100+ XP Achiever",
            Self::Xp300 => "300+ XP Hero",
            Self::Coins50 => "50 Coins Collector",
            Self::Coins100 => "100 Coins Wealth Master",
        }
    }

    pub fn tier(self) -> BadgeTier {
        match self {
            Self::Streak3 => BadgeTier::Bronze,
            Self::Xp100 | Self::Coins50 => BadgeTier::Silver,
            Self::Streak7 | Self::Xp300 | Self::Coins100 => BadgeTier::Gold,
        }
    }
}

impl Display for BadgeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for BadgeTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bronze => f.write_str("Bronze"),
            Self::Silver => f.write_str("Silver"),
            Self::Gold => f.write_str("Gold"),
        }
    }
}
