//! Tournament business logic: fixture generation, standings, seeding and session transitions.

mod bracket;
mod fixtures;
mod progression;
mod roster_csv;
mod standings;

pub use bracket::{seed_bracket, QUARTER_FINAL_MIN_PLAYERS, SEMI_FINAL_MIN_PLAYERS};
pub use fixtures::round_robin_fixtures;
pub use progression::{
    current_bracket, current_standings, generate_fixtures, record_winner, reveal_bracket,
};
pub use roster_csv::{fixtures_to_csv, parse_roster_csv};
pub use standings::rank_standings;
