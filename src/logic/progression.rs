//! Session transitions: generate fixtures, record winners, reveal the bracket.

use crate::logic::{rank_standings, round_robin_fixtures, seed_bracket};
use crate::models::{
    BracketResult, MatchNo, RevealedBracket, SessionState, Standing, TournamentError,
    TournamentSession,
};
use chrono::Utc;

/// Replace the fixture list with a fresh round-robin over the current roster.
///
/// Clears all recorded winners and any revealed bracket. Always ends in `Scheduled`, even when
/// the roster is too small to produce any fixture.
pub fn generate_fixtures(session: &mut TournamentSession) -> Result<(), TournamentError> {
    let fixtures = round_robin_fixtures(&session.roster_names())?;

    session.fixtures = fixtures;
    session.winners.clear();
    session.generated_at = Some(Utc::now());
    session.mark_changed();
    session.state = SessionState::Scheduled;

    log::debug!(
        "session {}: generated {} fixtures for {} players",
        session.id,
        session.fixtures.len(),
        session.players.len()
    );
    Ok(())
}

/// Record (or overwrite) the winner of one fixture.
///
/// The winner must be one of the fixture's two players. Nothing changes on error.
pub fn record_winner(
    session: &mut TournamentSession,
    match_no: MatchNo,
    winner: &str,
) -> Result<(), TournamentError> {
    let fixture = session
        .fixture(match_no)
        .ok_or(TournamentError::UnknownFixture(match_no))?;
    let winner = winner.trim();
    if !fixture.involves(winner) {
        return Err(TournamentError::InvalidWinner {
            match_no,
            winner: winner.to_string(),
        });
    }

    session.winners.insert(match_no, winner.to_string());
    session.mark_changed();
    log::debug!("session {}: match {} won by {}", session.id, match_no, winner);
    Ok(())
}

/// Standings computed from the session's current roster, fixtures and winners.
pub fn current_standings(session: &TournamentSession) -> Vec<Standing> {
    rank_standings(&session.roster_names(), &session.fixtures, &session.winners)
}

/// Compute the bracket from current results and cache it against the session version.
pub fn reveal_bracket(session: &mut TournamentSession) -> &BracketResult {
    let bracket = seed_bracket(&current_standings(session));
    log::debug!("session {}: bracket revealed at version {}", session.id, session.version);

    session.state = SessionState::BracketRevealed;
    &session
        .revealed_bracket
        .insert(RevealedBracket {
            version: session.version,
            bracket,
        })
        .bracket
}

/// The revealed bracket if still current, otherwise one seeded from the current standings.
///
/// Read-only: nothing is cached and the session state does not change.
pub fn current_bracket(session: &TournamentSession) -> BracketResult {
    match session.bracket() {
        Some(bracket) => bracket.clone(),
        None => seed_bracket(&current_standings(session)),
    }
}
