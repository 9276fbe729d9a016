//! Round-robin tournament web app: library with models and business logic.

pub mod config;
pub mod logic;
pub mod models;

pub use logic::{
    current_bracket, current_standings, fixtures_to_csv, generate_fixtures, parse_roster_csv,
    rank_standings, record_winner, reveal_bracket, round_robin_fixtures, seed_bracket,
    QUARTER_FINAL_MIN_PLAYERS, SEMI_FINAL_MIN_PLAYERS,
};
pub use models::{
    BracketFixture, BracketResult, Fixture, MatchNo, Player, PlayerId, RevealedBracket, SessionId,
    SessionState, Standing, TournamentError, TournamentSession, WinnerMap,
};
