//! Daily streak transitions.

use chrono::NaiveDateTime;

/// Streak state after recording a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakUpdate {
    pub streak: u32,
    pub last_complete_date: NaiveDateTime,
}

/// Computes the streak after a completion at `now`.
///
/// - No previous completion: streak starts at 1.
/// - Previous completion today: unchanged.
/// - Previous completion yesterday: incremented.
/// - Older or future previous completion: reset to 1.
///
/// `last_complete_date` is always `now`.
pub fn update_streak(
    current_streak: u32,
    last_complete_date: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> StreakUpdate {
    let today = now.date();
    let streak = match last_complete_date.map(|last| last.date()) {
        None => 1,
        Some(last) if last == today => current_streak,
        Some(last) if last.succ_opt() == Some(today) => current_streak.saturating_add(1),
        Some(_) => 1,
    };

    StreakUpdate {
        streak,
        last_complete_date: now,
    }
}
