//! Game import from structured CSV (one game per row, teams by name).
//!
//! Expected header: `home,away,home_score,away_score` with an optional `date`
//! column (`YYYY-MM-DD`). Column order does not matter.

use crate::models::{GameResult, GroupConfig};
use chrono::NaiveDate;
use std::io::Read;

/// Errors that can occur while importing games.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ImportError {
    /// The CSV itself could not be read.
    Csv { line: Option<u64>, message: String },
    /// A required column is missing from the header.
    MissingColumn(&'static str),
    /// A score is not a non-negative integer.
    InvalidScore { line: u64, value: String },
    /// A date is not `YYYY-MM-DD`.
    InvalidDate { line: u64, value: String },
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Csv { line: Some(line), message } => {
                write!(f, "Could not read CSV at line {}: {}", line, message)
            }
            ImportError::Csv { line: None, message } => write!(f, "Could not read CSV: {}", message),
            ImportError::MissingColumn(name) => write!(f, "Missing column '{}'", name),
            ImportError::InvalidScore { line, value } => {
                write!(f, "Line {}: '{}' is not a valid score", line, value)
            }
            ImportError::InvalidDate { line, value } => {
                write!(f, "Line {}: '{}' is not a date (expected YYYY-MM-DD)", line, value)
            }
        }
    }
}

impl std::error::Error for ImportError {}

impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        ImportError::Csv {
            line: e.position().map(|p| p.line()),
            message: e.to_string(),
        }
    }
}

struct Columns {
    home: usize,
    away: usize,
    home_score: usize,
    away_score: usize,
    date: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, ImportError> {
        let find = |name: &str| headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name));
        let require = |name: &'static str| find(name).ok_or(ImportError::MissingColumn(name));
        Ok(Self {
            home: require("home")?,
            away: require("away")?,
            home_score: require("home_score")?,
            away_score: require("away_score")?,
            date: find("date"),
        })
    }
}

/// Read games from CSV, resolving team names against `config`.
///
/// Rows naming a team that is not in the group are skipped (logged). A row with
/// both scores blank is a scheduled game; a row with only one score is imported
/// as unplayed.
pub fn import_games<R: Read>(config: &GroupConfig, reader: R) -> Result<Vec<GameResult>, ImportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let columns = Columns::from_headers(rdr.headers()?)?;

    let mut games = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let field = |idx: usize| record.get(idx).unwrap_or("");

        let (home_name, away_name) = (field(columns.home), field(columns.away));
        let (Some(home), Some(away)) = (config.team_by_name(home_name), config.team_by_name(away_name))
        else {
            log::warn!(
                "Skipping line {}: '{}' vs '{}' is not a game of this group",
                line,
                home_name,
                away_name
            );
            continue;
        };

        let home_score = parse_score(field(columns.home_score), line)?;
        let away_score = parse_score(field(columns.away_score), line)?;
        let date = match columns.date.map(field) {
            Some(value) if !value.is_empty() => Some(
                NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ImportError::InvalidDate {
                    line,
                    value: value.to_string(),
                })?,
            ),
            _ => None,
        };

        games.push(GameResult {
            home_team: home.id,
            away_team: away.id,
            home_score,
            away_score,
            played: home_score.is_some() && away_score.is_some(),
            date,
        });
    }

    log::info!("Imported {} game(s)", games.len());
    Ok(games)
}

/// [`import_games`] over an in-memory string.
pub fn import_games_str(config: &GroupConfig, csv: &str) -> Result<Vec<GameResult>, ImportError> {
    import_games(config, csv.as_bytes())
}

fn parse_score(value: &str, line: u64) -> Result<Option<u32>, ImportError> {
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|_| ImportError::InvalidScore {
        line,
        value: value.to_string(),
    })
}
