//! Knockout seeding from the standings.

use crate::models::{BracketFixture, BracketResult, Standing};

/// Smallest field that gets quarter-finals (top 8 seeded).
pub const QUARTER_FINAL_MIN_PLAYERS: usize = 9;
/// Smallest field that gets semi-finals (top 4 seeded).
pub const SEMI_FINAL_MIN_PLAYERS: usize = 4;

/// Seed the knockout round from ranked standings (index 0 is the top seed).
///
/// - 9 or more players: quarter-finals 1v8, 2v7, 3v6, 4v5 as `QF1..QF4`.
///   Players ranked 9th and below are not seeded.
/// - 4 to 8 players: semi-finals 1v4, 2v3 as `SF1`, `SF2`.
/// - Fewer than 4: no bracket.
pub fn seed_bracket(standings: &[Standing]) -> BracketResult {
    let ranked: Vec<&str> = standings.iter().map(|s| s.name.as_str()).collect();
    let pair = |label: &str, high: usize, low: usize| BracketFixture::new(label, ranked[high], ranked[low]);

    if ranked.len() >= QUARTER_FINAL_MIN_PLAYERS {
        BracketResult::QuarterFinals([
            pair("QF1", 0, 7),
            pair("QF2", 1, 6),
            pair("QF3", 2, 5),
            pair("QF4", 3, 4),
        ])
    } else if ranked.len() >= SEMI_FINAL_MIN_PLAYERS {
        BracketResult::SemiFinals([pair("SF1", 0, 3), pair("SF2", 1, 2)])
    } else {
        BracketResult::NoBracket
    }
}
