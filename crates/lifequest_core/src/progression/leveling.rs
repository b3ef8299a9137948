//! Linear leveling curve.
//!
//! Level `L` needs `100 * L` XP to advance to `L + 1`.

use serde::Serialize;

/// XP required per level step, multiplied by the current level.
pub const XP_PER_LEVEL_STEP: u64 = 100;

/// Position of a cumulative XP total on the leveling curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelProgress {
    /// Current level, starting at 1.
    pub level: u64,
    /// XP earned inside the current level.
    pub remainder: u64,
    /// XP the current level requires before advancing.
    pub next_level_threshold: u64,
}

impl LevelProgress {
    /// XP still missing before the next level.
    pub fn xp_to_next_level(&self) -> u64 {
        self.next_level_threshold - self.remainder
    }

    /// Progress through the current level in `[0.0, 1.0)`.
    pub fn fraction(&self) -> f64 {
        self.remainder as f64 / self.next_level_threshold as f64
    }
}

/// Maps cumulative XP to `(level, remainder, next_level_threshold)`.
///
/// Always terminates: `remainder` strictly decreases while thresholds grow.
pub fn level_from_xp(xp: u64) -> LevelProgress {
    let mut level: u64 = 1;
    let mut remainder = xp;
    while remainder >= XP_PER_LEVEL_STEP * level {
        remainder -= XP_PER_LEVEL_STEP * level;
        level += 1;
    }

    LevelProgress {
        level,
        remainder,
        next_level_threshold: XP_PER_LEVEL_STEP * level,
    }
}
