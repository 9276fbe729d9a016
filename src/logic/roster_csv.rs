//! CSV roster import and fixture export.

use crate::models::{Fixture, TournamentError, WinnerMap};
use serde::Serialize;
use std::io::Read;

/// Read player names from the first column of a CSV document.
///
/// With `has_header` the first row is skipped whatever it holds; otherwise every row is a
/// player, so a player literally called "Name" is kept. Blank rows are skipped. Names are
/// trimmed but not deduplicated; the roster decides whether they are acceptable.
pub fn parse_roster_csv<R: Read>(reader: R, has_header: bool) -> Result<Vec<String>, TournamentError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut names = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| TournamentError::RosterImport(e.to_string()))?;
        if let Some(name) = record.get(0).filter(|n| !n.is_empty()) {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

#[derive(Serialize)]
struct FixtureRow<'a> {
    match_no: u32,
    player_a: &'a str,
    player_b: &'a str,
    winner: Option<&'a str>,
}

const FIXTURE_CSV_HEADER: [&str; 4] = ["match_no", "player_a", "player_b", "winner"];

/// Write fixtures as CSV with a `match_no,player_a,player_b,winner` header, even when there
/// are no fixtures. Unplayed matches have an empty winner column.
pub fn fixtures_to_csv(fixtures: &[Fixture], winners: &WinnerMap) -> Result<String, TournamentError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    wtr.write_record(FIXTURE_CSV_HEADER).map_err(export_error)?;
    for f in fixtures {
        wtr.serialize(FixtureRow {
            match_no: f.match_no,
            player_a: &f.player_a,
            player_b: &f.player_b,
            winner: winners.get(&f.match_no).map(String::as_str),
        })
        .map_err(export_error)?;
    }
    let bytes = wtr.into_inner().map_err(export_error)?;
    String::from_utf8(bytes).map_err(export_error)
}

fn export_error(e: impl std::fmt::Display) -> TournamentError {
    TournamentError::FixtureExport(e.to_string())
}
