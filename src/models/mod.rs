//! Data structures for the round-robin: players, fixtures, standings, brackets, session state.

mod bracket;
mod fixture;
mod player;
mod session;

pub use bracket::{BracketFixture, BracketResult, Standing};
pub use fixture::{Fixture, MatchNo, WinnerMap};
pub use player::{Player, PlayerId};
pub use session::{RevealedBracket, SessionId, SessionState, TournamentError, TournamentSession};
