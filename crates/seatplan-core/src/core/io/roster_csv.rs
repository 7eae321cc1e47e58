use crate::core::models::person::{Person, ZonePreference};
use crate::core::models::roster::Roster;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

const COL_NUMBER: usize = 0;
const COL_NAME: usize = 1;
const COL_LIKES: usize = 2;
const COL_DISLIKES: usize = 3;
const COL_ZONE: usize = 4;
const COL_NOTE: usize = 5;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: u64,
        kind: RosterParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterParseErrorKind {
    #[error("Name column (column {}) is empty", COL_NAME + 1)]
    MissingName,
}

/// Reader for participant rosters in CSV form.
///
/// The first line is a header and is skipped. Each following record holds, in order:
/// display number, name, liked names, disliked names, zone preference, note. Trailing
/// columns may be omitted and default to empty. Name lists are separated by `|` or
/// whitespace. The zone column is read leniently: `front` or `앞` selects the front zone,
/// `back`, `뒤` or `뒷` (as in `뒷자리`) the back zone, and anything else means no preference.
pub struct RosterCsv;

impl RosterCsv {
    pub fn read_from(reader: impl Read) -> Result<Roster, RosterError> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut roster = Roster::new();
        for record in csv_reader.records() {
            let record = record?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            let line = record.position().map_or(0, |p| p.line());
            roster.push(parse_record(&record, line)?);
        }

        debug!(people = roster.len(), "Roster parsed.");
        Ok(roster)
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Roster, RosterError> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }
}

fn parse_record(record: &StringRecord, line: u64) -> Result<Person, RosterError> {
    let field = |idx: usize| record.get(idx).unwrap_or("");

    let name = field(COL_NAME);
    if name.is_empty() {
        return Err(RosterError::Parse {
            line,
            kind: RosterParseErrorKind::MissingName,
        });
    }

    Ok(Person::new(name)
        .with_display_number(field(COL_NUMBER))
        .with_likes(split_names(field(COL_LIKES)))
        .with_dislikes(split_names(field(COL_DISLIKES)))
        .with_zone_preference(parse_zone_label(field(COL_ZONE)))
        .with_note(field(COL_NOTE)))
}

fn split_names(field: &str) -> impl Iterator<Item = &str> {
    field
        .split(|c: char| c == '|' || c.is_whitespace())
        .filter(|s| !s.is_empty())
}

/// Interprets a free-text zone column. Front markers win when both are present.
pub fn parse_zone_label(label: &str) -> ZonePreference {
    let label = label.trim().to_lowercase();
    if label.contains("front") || label.contains('앞') {
        ZonePreference::Front
    } else if label.contains("back") || label.contains(['뒤', '뒷']) {
        ZonePreference::Back
    } else {
        ZonePreference::Anywhere
    }
}
