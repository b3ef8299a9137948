//! Badge unlock evaluation over `BADGE_CATALOG`.

use crate::model::badge::{BadgeId, BadgeRule, BadgeStat, BADGE_CATALOG};
use crate::model::user::User;

/// Unlocks every catalog badge whose condition holds and that the user lacks.
///
/// Returns the newly unlocked ids in catalog order. Held badges are never
/// removed, so a second call with unchanged stats returns an empty list.
pub fn evaluate_badges(user: &mut User) -> Vec<BadgeId> {
    let mut newly_unlocked = Vec::new();
    for rule in BADGE_CATALOG.iter() {
        if rule_holds(rule, user) && !user.has_badge(rule.id) {
            user.badges.push(rule.id);
            newly_unlocked.push(rule.id);
        }
    }
    newly_unlocked
}

/// Returns whether `rule` is satisfied by the current stats of `user`.
pub fn rule_holds(rule: &BadgeRule, user: &User) -> bool {
    let value = match rule.stat {
        BadgeStat::Streak => u64::from(user.streak),
        BadgeStat::Xp => user.xp,
        BadgeStat::Coins => user.coins,
    };
    value >= rule.threshold
}
