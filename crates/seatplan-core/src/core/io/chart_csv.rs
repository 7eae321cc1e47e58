use crate::core::models::assignment::Assignment;
use crate::core::models::grid::{Grid, Zone};
use crate::core::models::roster::Roster;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Chart has {actual} seats but the grid has {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Serialize)]
struct ChartRow<'a> {
    seat: usize,
    row: usize,
    col: usize,
    zone: Zone,
    number: &'a str,
    name: &'a str,
    note: &'a str,
}

/// Writer for finished seating charts.
///
/// One CSV record per seat in seat order. `seat` is 1-based, `row` and `col` are
/// 0-based grid coordinates with row 0 at the front. Empty seats keep the person columns
/// blank.
pub struct ChartCsv;

impl ChartCsv {
    pub fn write_to(
        roster: &Roster,
        grid: &Grid,
        assignment: &Assignment,
        writer: impl Write,
    ) -> Result<(), ChartError> {
        if assignment.len() != grid.capacity() {
            return Err(ChartError::SizeMismatch {
                expected: grid.capacity(),
                actual: assignment.len(),
            });
        }

        let mut csv_writer = csv::Writer::from_writer(writer);
        for (seat, occupant) in assignment.iter() {
            let person = occupant.and_then(|id| roster.get(id));
            let (row, col) = grid.coords(seat);
            csv_writer.serialize(ChartRow {
                seat: seat + 1,
                row,
                col,
                zone: grid.zone_of(row),
                number: person.map_or("", |p| p.display_number.as_str()),
                name: person.map_or("", |p| p.name.as_str()),
                note: person.map_or("", |p| p.note.as_str()),
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn write_to_path<P: AsRef<Path>>(
        roster: &Roster,
        grid: &Grid,
        assignment: &Assignment,
        path: P,
    ) -> Result<(), ChartError> {
        let file = File::create(path)?;
        Self::write_to(roster, grid, assignment, BufWriter::new(file))
    }
}
