use crate::core::models::assignment::Assignment;
use crate::core::models::grid::Grid;
use crate::core::models::ids::PersonId;
use crate::core::models::person::Person;
use crate::core::models::roster::Roster;

/// Whether `occupant` may sit in `seat`. An empty slot may go anywhere; a zone-pinned
/// person only into a seat of that zone.
#[inline]
pub fn can_occupy(grid: &Grid, occupant: Option<&Person>, seat: usize) -> bool {
    match occupant.and_then(|p| p.zone_preference.required_zone()) {
        Some(zone) => grid.zone_of_seat(seat) == zone,
        None => true,
    }
}

/// Seat legality for the members of one roster.
#[derive(Debug, Clone, Copy)]
pub struct SeatRules<'a> {
    roster: &'a Roster,
    grid: &'a Grid,
}

impl<'a> SeatRules<'a> {
    pub fn new(roster: &'a Roster, grid: &'a Grid) -> Self {
        Self { roster, grid }
    }

    #[inline]
    pub fn allows(&self, occupant: Option<PersonId>, seat: usize) -> bool {
        can_occupy(self.grid, occupant.and_then(|id| self.roster.get(id)), seat)
    }

    /// Whether exchanging the occupants of seats `a` and `b` keeps both legal.
    #[inline]
    pub fn swap_is_legal(&self, assignment: &Assignment, a: usize, b: usize) -> bool {
        self.allows(assignment.occupant(a), b) && self.allows(assignment.occupant(b), a)
    }
}
