//! TournamentSession, SessionState and TournamentError.

use crate::models::bracket::BracketResult;
use crate::models::fixture::{Fixture, MatchNo, WinnerMap};
use crate::models::player::{Player, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// The same name appears more than once in a roster handed to the fixture generator.
    InvalidRoster(String),
    /// No fixture with this match number.
    UnknownFixture(MatchNo),
    /// Recorded winner is neither of the fixture's two players.
    InvalidWinner { match_no: MatchNo, winner: String },
    /// Player name is empty after trimming.
    EmptyPlayerName,
    /// A player with this name already exists (names are unique, case-insensitive).
    DuplicatePlayerName(String),
    /// Player not found in the roster.
    PlayerNotFound(PlayerId),
    /// Roster CSV could not be read.
    RosterImport(String),
    /// Fixture CSV could not be written.
    FixtureExport(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidRoster(name) => {
                write!(f, "Roster lists player '{}' more than once", name)
            }
            TournamentError::UnknownFixture(match_no) => write!(f, "Match {} not found", match_no),
            TournamentError::InvalidWinner { match_no, winner } => {
                write!(f, "'{}' does not play in match {}", winner, match_no)
            }
            TournamentError::EmptyPlayerName => write!(f, "Player name is required"),
            TournamentError::DuplicatePlayerName(name) => {
                write!(f, "A player named '{}' already exists", name)
            }
            TournamentError::PlayerNotFound(_) => write!(f, "Player not found"),
            TournamentError::RosterImport(msg) => write!(f, "Could not read roster CSV: {}", msg),
            TournamentError::FixtureExport(msg) => write!(f, "Could not write fixture CSV: {}", msg),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a hosted session.
pub type SessionId = Uuid;

/// Progress of the round-robin.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No fixtures yet.
    #[default]
    Empty,
    /// Fixtures generated, no winners recorded.
    Scheduled,
    /// At least one winner recorded.
    InProgress,
    /// Bracket computed from the current results.
    BracketRevealed,
}

/// Bracket tagged with the session version it was computed at.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RevealedBracket {
    pub version: u64,
    pub bracket: BracketResult,
}

/// Roster, fixtures and results of one tournament.
///
/// `winners` only ever holds match numbers of current `fixtures`, each mapped to one of
/// that fixture's two players.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TournamentSession {
    pub id: SessionId,
    /// Registered players in registration order (this order breaks ties in standings).
    pub players: Vec<Player>,
    pub fixtures: Vec<Fixture>,
    pub winners: WinnerMap,
    pub state: SessionState,
    /// Bumped on every roster, fixture or winner mutation.
    pub version: u64,
    pub revealed_bracket: Option<RevealedBracket>,
    /// When fixtures were last generated.
    pub generated_at: Option<DateTime<Utc>>,
}

impl Default for TournamentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TournamentSession {
    /// Create an empty session with no players.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            players: Vec::new(),
            fixtures: Vec::new(),
            winners: WinnerMap::new(),
            state: SessionState::Empty,
            version: 0,
            revealed_bracket: None,
            generated_at: None,
        }
    }

    /// Create a session with the given players (no fixtures yet).
    pub fn with_players(players: Vec<Player>) -> Self {
        Self {
            players,
            ..Self::new()
        }
    }

    /// Player names in roster order.
    pub fn roster_names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }

    pub fn fixture(&self, match_no: MatchNo) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.match_no == match_no)
    }

    /// The revealed bracket, if it was computed from the current data.
    pub fn bracket(&self) -> Option<&BracketResult> {
        self.revealed_bracket
            .as_ref()
            .filter(|r| r.version == self.version)
            .map(|r| &r.bracket)
    }

    /// Add a player. Names are trimmed, must be non-empty and unique (case-insensitive).
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<&Player, TournamentError> {
        let name: String = name.into();
        let name = self.validate_new_name(&name, &[])?;
        self.players.push(Player::new(name));
        self.mark_changed();
        log::debug!("session {}: added player, roster size {}", self.id, self.players.len());
        Ok(&self.players[self.players.len() - 1])
    }

    /// Add several players at once. Either all are added or none.
    pub fn add_players<I, S>(&mut self, names: I) -> Result<usize, TournamentError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut accepted: Vec<String> = Vec::new();
        for name in names {
            let name = self.validate_new_name(name.as_ref(), &accepted)?;
            accepted.push(name);
        }
        let added = accepted.len();
        if added > 0 {
            self.players.extend(accepted.into_iter().map(Player::new));
            self.mark_changed();
            log::debug!("session {}: imported {} players", self.id, added);
        }
        Ok(added)
    }

    /// Remove a player by id. Fixtures naming the player and their results are dropped with it.
    pub fn remove_player(&mut self, player_id: PlayerId) -> Result<Player, TournamentError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(TournamentError::PlayerNotFound(player_id))?;
        let player = self.players.remove(idx);

        let before = self.fixtures.len();
        self.fixtures.retain(|f| !f.involves(&player.name));
        let fixtures = &self.fixtures;
        self.winners.retain(|match_no, winner| {
            *winner != player.name && fixtures.iter().any(|f| f.match_no == *match_no)
        });
        log::debug!(
            "session {}: removed player, dropped {} fixtures",
            self.id,
            before - self.fixtures.len()
        );

        self.mark_changed();
        Ok(player)
    }

    /// Bump the version and drop any revealed bracket; state falls back to what the data shows.
    pub(crate) fn mark_changed(&mut self) {
        self.version += 1;
        self.revealed_bracket = None;
        self.state = if !self.winners.is_empty() {
            SessionState::InProgress
        } else if !self.fixtures.is_empty() {
            SessionState::Scheduled
        } else {
            SessionState::Empty
        };
    }

    fn validate_new_name(&self, name: &str, pending: &[String]) -> Result<String, TournamentError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        let is_duplicate = self
            .players
            .iter()
            .map(|p| p.name.as_str())
            .chain(pending.iter().map(String::as_str))
            .any(|existing| existing.eq_ignore_ascii_case(trimmed));
        if is_duplicate {
            return Err(TournamentError::DuplicatePlayerName(trimmed.to_string()));
        }
        Ok(trimmed.to_string())
    }
}
