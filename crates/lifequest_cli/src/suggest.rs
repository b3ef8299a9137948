//! XP suggestion for new task titles.
//!
//! # Responsibility
//! - Propose an XP reward from a free-form task title.
//! - Stay swappable: the core never depends on this heuristic.
//!
//! # Invariants
//! - Suggestions are always greater than zero.
//! - Rules are checked in order; the first matching rule wins.

use once_cell::sync::Lazy;
use regex::Regex;

/// XP used for a blank title.
pub const BLANK_TITLE_XP: u32 = 10;
/// XP used when no keyword rule matches.
pub const DEFAULT_XP: u32 = 15;

static KEYWORD_RULES: Lazy<Vec<(Regex, u32)>> = Lazy::new(|| {
    [
        (r"study|learn|python|dsa", 50),
        (r"exercise|workout|yoga", 40),
        (r"read|project|assignment", 30),
        (r"clean|organize|chores", 20),
        (r"movie|game|relax", 10),
    ]
    .into_iter()
    .map(|(pattern, xp)| (Regex::new(pattern).expect("valid keyword regex"), xp))
    .collect()
});

/// Maps a task title to a suggested XP reward.
pub trait XpSuggester {
    fn suggest(&self, title: &str) -> u32;
}

/// Lowercased keyword matching against a fixed rule table.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordSuggester;

impl XpSuggester for KeywordSuggester {
    fn suggest(&self, title: &str) -> u32 {
        let normalized = title.trim().to_lowercase();
        if normalized.is_empty() {
            return BLANK_TITLE_XP;
        }
        KEYWORD_RULES
            .iter()
            .find(|(pattern, _)| pattern.is_match(&normalized))
            .map(|(_, xp)| *xp)
            .unwrap_or(DEFAULT_XP)
    }
}

#[cfg(test)]
mod tests {
    use super::{KeywordSuggester, XpSuggester, BLANK_TITLE_XP, DEFAULT_XP};

    #[test]
    fn keywords_map_to_tiers() {
        let suggester = KeywordSuggester;
        assert_eq!(suggester.suggest("Study Python for 30 mins"), 50);
        assert_eq!(suggester.suggest("Morning YOGA"), 40);
        assert_eq!(suggester.suggest("Read a chapter"), 30);
        assert_eq!(suggester.suggest("organize desk"), 20);
        assert_eq!(suggester.suggest("watch a movie"), 10);
    }

    #[test]
    fn matches_substrings_and_first_rule_wins() {
        let suggester = KeywordSuggester;
        assert_eq!(suggester.suggest("relearning algebra"), 50);
        assert_eq!(suggester.suggest("read about python"), 50);
    }

    #[test]
    fn fallback_values() {
        let suggester = KeywordSuggester;
        assert_eq!(suggester.suggest("call mom"), DEFAULT_XP);
        assert_eq!(suggester.suggest("   "), BLANK_TITLE_XP);
    }
}
