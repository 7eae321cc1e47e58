use serde::{Deserialize, Serialize};
use std::fmt;

/// A contiguous band of grid rows with its own seating policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Zone {
    Front,
    Middle,
    Back,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Zone::Front => "front",
            Zone::Middle => "middle",
            Zone::Back => "back",
        };
        f.write_str(name)
    }
}

/// Fixed seat geometry of a room.
///
/// Seats are addressed by a linear index `0 <= i < rows * cols` in row-major order,
/// so row `0` is the front of the room. The first `zone_depth` rows form the front
/// zone and the last `zone_depth` rows form the back zone; when the two bands would
/// overlap the front zone takes precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    zone_depth: usize,
}

impl Grid {
    /// Creates a grid with the given shape and front/back zone depth (in rows).
    pub fn new(rows: usize, cols: usize, zone_depth: usize) -> Self {
        Self {
            rows,
            cols,
            zone_depth,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn zone_depth(&self) -> usize {
        self.zone_depth
    }

    /// Total number of seats.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn row(&self, seat: usize) -> usize {
        seat / self.cols
    }

    #[inline]
    pub fn col(&self, seat: usize) -> usize {
        seat % self.cols
    }

    /// Returns `(row, col)` for a linear seat index.
    #[inline]
    pub fn coords(&self, seat: usize) -> (usize, usize) {
        (self.row(seat), self.col(seat))
    }

    /// Returns the linear index of the seat at `(row, col)`, or `None` if it is off the grid.
    pub fn seat_index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// True iff the two seats are distinct and at Chebyshev distance exactly 1.
    ///
    /// Horizontal, vertical and diagonal neighbors all count. The relation is
    /// symmetric and irreflexive.
    #[inline]
    pub fn is_neighbor(&self, a: usize, b: usize) -> bool {
        if a == b {
            return false;
        }
        let (r1, c1) = self.coords(a);
        let (r2, c2) = self.coords(b);
        r1.abs_diff(r2) <= 1 && c1.abs_diff(c2) <= 1
    }

    /// Iterates over all seats adjacent to `seat` (at most 8, fewer on edges).
    pub fn neighbors(&self, seat: usize) -> impl Iterator<Item = usize> + '_ {
        let (row, col) = self.coords(seat);
        let rows = row.saturating_sub(1)..=(row + 1).min(self.rows.saturating_sub(1));
        rows.flat_map(move |r| {
            let cols = col.saturating_sub(1)..=(col + 1).min(self.cols.saturating_sub(1));
            cols.map(move |c| r * self.cols + c)
        })
        .filter(move |&other| other != seat)
    }

    /// Classifies a row index into its zone.
    #[inline]
    pub fn zone_of(&self, row: usize) -> Zone {
        if row < self.zone_depth {
            Zone::Front
        } else if row + self.zone_depth >= self.rows {
            Zone::Back
        } else {
            Zone::Middle
        }
    }

    /// Zone of the row the seat belongs to.
    #[inline]
    pub fn zone_of_seat(&self, seat: usize) -> Zone {
        self.zone_of(self.row(seat))
    }

    /// All seat indices of the given zone, in ascending order.
    pub fn seats_in(&self, zone: Zone) -> Vec<usize> {
        (0..self.capacity())
            .filter(|&seat| self.zone_of_seat(seat) == zone)
            .collect()
    }

    pub fn zone_capacity(&self, zone: Zone) -> usize {
        (0..self.rows).filter(|&r| self.zone_of(r) == zone).count() * self.cols
    }
}
