use super::ids::PersonId;
use super::roster::Roster;
use std::collections::HashSet;

/// Seat-to-person mapping over a grid.
///
/// The number of slots is fixed at construction; only occupants move. Every
/// mutation is either a placement into an empty slot or a swap of two slots, so a
/// person can never be duplicated or lost once seated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    seats: Vec<Option<PersonId>>,
}

impl Assignment {
    /// An assignment of `capacity` empty seats.
    pub fn empty(capacity: usize) -> Self {
        Self {
            seats: vec![None; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    #[inline]
    pub fn occupant(&self, seat: usize) -> Option<PersonId> {
        self.seats[seat]
    }

    /// Seats a person in an empty slot. Returns `false` and leaves the slot untouched
    /// if it is already taken.
    pub fn place(&mut self, seat: usize, person: PersonId) -> bool {
        match self.seats[seat] {
            Some(_) => false,
            None => {
                self.seats[seat] = Some(person);
                true
            }
        }
    }

    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.seats.swap(a, b);
    }

    /// `(seat, occupant)` for every slot in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<PersonId>)> + '_ {
        self.seats.iter().copied().enumerate()
    }

    /// `(seat, person)` for every occupied slot in seat order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, PersonId)> + '_ {
        self.iter().filter_map(|(seat, p)| p.map(|id| (seat, id)))
    }

    pub fn empty_seats(&self) -> Vec<usize> {
        self.iter()
            .filter(|(_, p)| p.is_none())
            .map(|(seat, _)| seat)
            .collect()
    }

    pub fn seat_of(&self, person: PersonId) -> Option<usize> {
        self.seats.iter().position(|&p| p == Some(person))
    }

    pub fn as_slice(&self) -> &[Option<PersonId>] {
        &self.seats
    }

    pub fn into_vec(self) -> Vec<Option<PersonId>> {
        self.seats
    }

    /// True iff every roster member occupies exactly one seat and nobody else is seated.
    pub fn seats_exactly(&self, roster: &Roster) -> bool {
        let mut seen = HashSet::with_capacity(roster.len());
        for (_, id) in self.occupied() {
            if roster.get(id).is_none() || !seen.insert(id) {
                return false;
            }
        }
        seen.len() == roster.len()
    }
}
