//! Round-robin fixture generation.

use crate::models::{Fixture, MatchNo, TournamentError};
use std::collections::HashSet;

/// Generate every pairing of the roster exactly once.
///
/// Pairs are enumerated as `(0,1), (0,2), .., (0,n-1), (1,2), ..` over roster positions; the
/// earlier-listed player always takes slot A, and `match_no` counts up from 1 in that order.
/// Rosters with fewer than two names yield no fixtures. A repeated name is rejected rather
/// than deduplicated.
pub fn round_robin_fixtures<S: AsRef<str>>(roster: &[S]) -> Result<Vec<Fixture>, TournamentError> {
    let mut seen = HashSet::with_capacity(roster.len());
    for name in roster {
        if !seen.insert(name.as_ref()) {
            return Err(TournamentError::InvalidRoster(name.as_ref().to_string()));
        }
    }

    let n = roster.len();
    if n < 2 {
        return Ok(Vec::new());
    }

    let mut fixtures = Vec::with_capacity(n * (n - 1) / 2);
    let mut match_no: MatchNo = 1;
    for (i, player_a) in roster.iter().enumerate() {
        for player_b in &roster[i + 1..] {
            fixtures.push(Fixture::new(match_no, player_a.as_ref(), player_b.as_ref()));
            match_no += 1;
        }
    }
    Ok(fixtures)
}
