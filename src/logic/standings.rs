//! Standings: tally recorded winners and rank players.

use crate::models::{Fixture, Standing, WinnerMap};
use std::collections::HashMap;

/// Rank every roster entry by recorded wins, most wins first.
///
/// Players with equal wins keep their roster order. Winner entries that reference an unknown
/// match, or a name not playing in that match, are skipped.
pub fn rank_standings<S: AsRef<str>>(
    roster: &[S],
    fixtures: &[Fixture],
    winners: &WinnerMap,
) -> Vec<Standing> {
    let by_match: HashMap<_, _> = fixtures.iter().map(|f| (f.match_no, f)).collect();

    let mut wins: HashMap<&str, u32> = HashMap::new();
    for (match_no, winner) in winners {
        match by_match.get(match_no) {
            Some(fixture) if fixture.involves(winner) => {
                *wins.entry(winner.as_str()).or_insert(0) += 1;
            }
            Some(_) => log::warn!("ignoring winner '{}' for match {}: not a participant", winner, match_no),
            None => log::warn!("ignoring winner for unknown match {}", match_no),
        }
    }

    let mut standings: Vec<Standing> = roster
        .iter()
        .map(|name| Standing {
            name: name.as_ref().to_string(),
            wins: wins.get(name.as_ref()).copied().unwrap_or(0),
        })
        .collect();
    // Vec::sort_by is stable, so ties stay in roster order.
    standings.sort_by(|a, b| b.wins.cmp(&a.wins));
    standings
}
