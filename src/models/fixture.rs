//! Round-robin fixture and the map of recorded winners.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 1-based match number, stable for the lifetime of a generated fixture list.
pub type MatchNo = u32;

/// Recorded winners keyed by match number. Partial: unplayed matches have no entry.
pub type WinnerMap = BTreeMap<MatchNo, String>;

/// One scheduled round-robin pairing.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub match_no: MatchNo,
    /// Player earlier in the roster.
    pub player_a: String,
    pub player_b: String,
}

impl Fixture {
    pub fn new(match_no: MatchNo, player_a: impl Into<String>, player_b: impl Into<String>) -> Self {
        Self {
            match_no,
            player_a: player_a.into(),
            player_b: player_b.into(),
        }
    }

    /// True if `name` plays in this fixture.
    pub fn involves(&self, name: &str) -> bool {
        self.player_a == name || self.player_b == name
    }
}
