//! Integration tests for knockout seeding.

use round_robin_web::{seed_bracket, BracketFixture, BracketResult, Standing};

/// Standings for `n` players already in rank order, P1 best.
fn ranked(n: usize) -> Vec<Standing> {
    (1..=n)
        .map(|i| Standing {
            name: format!("P{i}"),
            wins: (n - i) as u32,
        })
        .collect()
}

#[test]
fn fewer_than_four_players_has_no_bracket() {
    assert_eq!(seed_bracket(&[]), BracketResult::NoBracket);
    assert_eq!(seed_bracket(&ranked(3)), BracketResult::NoBracket);
}

#[test]
fn four_players_play_semi_finals() {
    assert_eq!(
        seed_bracket(&ranked(4)),
        BracketResult::SemiFinals([
            BracketFixture::new("SF1", "P1", "P4"),
            BracketFixture::new("SF2", "P2", "P3"),
        ])
    );
}

#[test]
fn eight_players_still_play_semi_finals_with_top_four() {
    assert_eq!(
        seed_bracket(&ranked(8)),
        BracketResult::SemiFinals([
            BracketFixture::new("SF1", "P1", "P4"),
            BracketFixture::new("SF2", "P2", "P3"),
        ])
    );
}

#[test]
fn nine_players_play_quarter_finals_and_ninth_is_left_out() {
    let bracket = seed_bracket(&ranked(9));
    assert_eq!(
        bracket,
        BracketResult::QuarterFinals([
            BracketFixture::new("QF1", "P1", "P8"),
            BracketFixture::new("QF2", "P2", "P7"),
            BracketFixture::new("QF3", "P3", "P6"),
            BracketFixture::new("QF4", "P4", "P5"),
        ])
    );
    assert!(bracket
        .fixtures()
        .iter()
        .all(|f| f.player1 != "P9" && f.player2 != "P9"));
}

#[test]
fn seeding_follows_standings_order_not_names() {
    let standings: Vec<Standing> = ["D", "B", "A", "C"]
        .iter()
        .map(|n| Standing { name: n.to_string(), wins: 0 })
        .collect();
    let bracket = seed_bracket(&standings);
    assert_eq!(bracket.fixtures()[0], BracketFixture::new("SF1", "D", "C"));
    assert_eq!(bracket.fixtures()[1], BracketFixture::new("SF2", "B", "A"));
}

#[test]
fn bracket_serializes_with_round_tag() {
    let json = serde_json::to_value(seed_bracket(&ranked(4))).unwrap();
    assert_eq!(json["round"], "semi_finals");
    assert_eq!(json["matches"][0]["label"], "SF1");
    let none = serde_json::to_value(BracketResult::NoBracket).unwrap();
    assert_eq!(none["round"], "no_bracket");
}
