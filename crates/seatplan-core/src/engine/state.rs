use super::tasks::hill_climb::SearchStats;
use crate::core::models::assignment::Assignment;
use crate::core::models::ids::PersonId;
use std::cmp::Ordering;

/// The outcome of one placement + hill-climb run.
///
/// Solutions order by score; on equal scores the earlier restart ranks higher, so the
/// maximum of a set of solutions is the one a sequential search would have kept.
#[derive(Debug, Clone)]
pub struct Solution {
    pub restart: usize,
    pub assignment: Assignment,
    pub score: i64,
    /// Zone-pinned people that had to be placed outside their zone.
    pub relaxed: Vec<PersonId>,
    pub stats: SearchStats,
}

impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.restart == other.restart
    }
}
impl Eq for Solution {}

impl PartialOrd for Solution {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Solution {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| other.restart.cmp(&self.restart))
    }
}
