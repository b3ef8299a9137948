use lifequest_core::{evaluate_badges, BadgeId, BadgeTier, User, BADGE_CATALOG};

#[test]
fn fresh_user_unlocks_nothing() {
    let mut user = User::new("tester");
    assert!(evaluate_badges(&mut user).is_empty());
    assert!(user.badges.is_empty());
}

#[test]
fn jump_to_150_xp_unlocks_only_xp_100() {
    let mut user = User::new("tester");
    user.xp = 150;
    assert_eq!(evaluate_badges(&mut user), vec![BadgeId::Xp100]);
}

#[test]
fn jump_to_300_xp_unlocks_both_in_catalog_order() {
    let mut user = User::new("tester");
    user.xp = 300;
    assert_eq!(
        evaluate_badges(&mut user),
        vec![BadgeId::Xp100, BadgeId::Xp300]
    );
}

#[test]
fn mixed_stats_report_catalog_order() {
    let mut user = User::new("tester");
    user.coins = 120;
    user.streak = 7;
    user.xp = 120;
    assert_eq!(
        evaluate_badges(&mut user),
        vec![
            BadgeId::Streak3,
            BadgeId::Streak7,
            BadgeId::Xp100,
            BadgeId::Coins50,
            BadgeId::Coins100,
        ]
    );
}

#[test]
fn evaluation_is_idempotent() {
    let mut user = User::new("tester");
    user.streak = 3;
    assert_eq!(evaluate_badges(&mut user), vec![BadgeId::Streak3]);
    assert!(evaluate_badges(&mut user).is_empty());
    assert_eq!(user.badges, vec![BadgeId::Streak3]);
}

#[test]
fn badges_are_not_revoked_when_stats_drop() {
    let mut user = User::new("tester");
    user.streak = 4;
    evaluate_badges(&mut user);

    user.streak = 1;
    assert!(evaluate_badges(&mut user).is_empty());
    assert!(user.has_badge(BadgeId::Streak3));
}

#[test]
fn catalog_ids_round_trip_through_parse() {
    for rule in BADGE_CATALOG {
        assert_eq!(BadgeId::parse(rule.id.as_str()), Some(rule.id));
    }
    assert_eq!(BadgeId::parse("xp-9000"), None);
}

#[test]
fn catalog_tiers_match_display_table() {
    assert_eq!(BadgeId::Streak3.tier(), BadgeTier::Bronze);
    assert_eq!(BadgeId::Xp100.tier(), BadgeTier::Silver);
    assert_eq!(BadgeId::Coins50.tier(), BadgeTier::Silver);
    assert_eq!(BadgeId::Coins100.tier(), BadgeTier::Gold);
    assert_eq!(BadgeId::Xp300.label(), "300+ XP Hero");
}

#[test]
fn badge_ids_serialize_as_kebab_case() {
    let json = serde_json::to_value(vec![BadgeId::Streak7, BadgeId::Coins100]).unwrap();
    assert_eq!(json, serde_json::json!(["streak-7", "coins-100"]));
}
