//! Standings rows and knockout bracket fixtures. Both are derived, never stored as input.

use serde::{Deserialize, Serialize};

/// A player's aggregated win count.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub wins: u32,
}

/// One seeded knockout match, e.g. `QF1` or `SF2`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketFixture {
    pub label: String,
    pub player1: String,
    pub player2: String,
}

impl BracketFixture {
    pub fn new(label: impl Into<String>, player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            player1: player1.into(),
            player2: player2.into(),
        }
    }
}

/// Knockout round seeded from the standings.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "round", content = "matches", rename_all = "snake_case")]
pub enum BracketResult {
    /// Fewer than four players ranked.
    NoBracket,
    SemiFinals([BracketFixture; 2]),
    QuarterFinals([BracketFixture; 4]),
}

impl BracketResult {
    /// Bracket fixtures in label order (empty for `NoBracket`).
    pub fn fixtures(&self) -> &[BracketFixture] {
        match self {
            BracketResult::NoBracket => &[],
            BracketResult::SemiFinals(f) => f,
            BracketResult::QuarterFinals(f) => f,
        }
    }
}
