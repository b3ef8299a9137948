//! Demo leaderboard derived from the session user's XP.
//!
//! The rival entries are synthetic; there is no shared leaderboard.

/// One ranked leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub name: String,
    pub xp: u64,
}

/// Builds the demo board around `user_xp`, sorted by XP descending.
pub fn synthetic_leaderboard(user_name: &str, user_xp: u64) -> Vec<LeaderboardEntry> {
    let mut rows = vec![
        (user_name.to_string(), user_xp),
        ("Ravi".to_string(), user_xp.saturating_sub(24)),
        ("Ananya".to_string(), user_xp.saturating_add(18)),
    ];
    // Stable sort keeps insertion order on ties.
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    rows.into_iter()
        .enumerate()
        .map(|(index, (name, xp))| LeaderboardEntry {
            rank: index + 1,
            name,
            xp,
        })
        .collect()
}
