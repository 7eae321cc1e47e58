use super::models::assignment::Assignment;
use super::models::grid::Grid;
use super::models::roster::Roster;
use std::collections::HashMap;

pub const DEFAULT_LIKE_WEIGHT: i64 = 20;
pub const DEFAULT_DISLIKE_WEIGHT: i64 = -100;

/// Reward for an adjacent liked name and penalty for an adjacent disliked name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    pub like: i64,
    pub dislike: i64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            like: DEFAULT_LIKE_WEIGHT,
            dislike: DEFAULT_DISLIKE_WEIGHT,
        }
    }
}

/// Directed preference hits behind a score.
///
/// A pair that like each other and sit side by side counts as two like hits, one from
/// each endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub like_hits: usize,
    pub dislike_hits: usize,
    pub total: i64,
}

/// Scores assignments of one roster on one grid.
///
/// The score is a pure function of the assignment. For every seated person, each liked
/// name seated next to them adds `weights.like` and each disliked name seated next to them
/// adds `weights.dislike`. Names are resolved through a name-to-seat table built in seat
/// order, so when two participants share a name the one in the higher seat index is the
/// one that counts. Unresolvable names contribute nothing.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    roster: &'a Roster,
    grid: &'a Grid,
    weights: ScoreWeights,
}

impl<'a> Scorer<'a> {
    pub fn new(roster: &'a Roster, grid: &'a Grid, weights: ScoreWeights) -> Self {
        Self {
            roster,
            grid,
            weights,
        }
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    #[inline]
    pub fn score(&self, assignment: &Assignment) -> i64 {
        self.breakdown(assignment).total
    }

    pub fn breakdown(&self, assignment: &Assignment) -> ScoreBreakdown {
        let name_to_seat = self.name_to_seat(assignment);
        let mut like_hits = 0;
        let mut dislike_hits = 0;

        for (seat, id) in assignment.occupied() {
            let Some(person) = self.roster.get(id) else {
                continue;
            };
            like_hits += self.adjacent_count(seat, &person.likes, &name_to_seat);
            dislike_hits += self.adjacent_count(seat, &person.dislikes, &name_to_seat);
        }

        ScoreBreakdown {
            like_hits,
            dislike_hits,
            total: weighted(like_hits, self.weights.like)
                .saturating_add(weighted(dislike_hits, self.weights.dislike)),
        }
    }

    fn name_to_seat(&self, assignment: &Assignment) -> HashMap<&'a str, usize> {
        let roster: &'a Roster = self.roster;
        let mut table = HashMap::with_capacity(roster.len());
        for (seat, id) in assignment.occupied() {
            if let Some(person) = roster.get(id) {
                table.insert(person.name.as_str(), seat);
            }
        }
        table
    }

    fn adjacent_count(
        &self,
        seat: usize,
        names: &[String],
        name_to_seat: &HashMap<&'a str, usize>,
    ) -> usize {
        names
            .iter()
            .filter_map(|name| name_to_seat.get(name.as_str()))
            .filter(|&&other| self.grid.is_neighbor(seat, other))
            .count()
    }
}

/// `hits * weight`, clamped to the `i64` range for extreme weights.
fn weighted(hits: usize, weight: i64) -> i64 {
    i64::try_from(hits)
        .unwrap_or(i64::MAX)
        .saturating_mul(weight)
}
