use super::config::ArrangementConfig;
use super::constraints::SeatRules;
use super::progress::ProgressReporter;
use crate::core::models::grid::Grid;
use crate::core::models::roster::Roster;
use crate::core::scoring::Scorer;

/// Read-only inputs shared by every task of one arrangement run.
#[derive(Clone, Copy)]
pub struct ArrangementContext<'a> {
    pub roster: &'a Roster,
    pub grid: &'a Grid,
    pub config: &'a ArrangementConfig,
    pub reporter: &'a ProgressReporter<'a>,
}

impl<'a> ArrangementContext<'a> {
    pub fn new(
        roster: &'a Roster,
        grid: &'a Grid,
        config: &'a ArrangementConfig,
        reporter: &'a ProgressReporter<'a>,
    ) -> Self {
        Self {
            roster,
            grid,
            config,
            reporter,
        }
    }

    pub fn scorer(&self) -> Scorer<'a> {
        Scorer::new(self.roster, self.grid, self.config.scoring)
    }

    pub fn rules(&self) -> SeatRules<'a> {
        SeatRules::new(self.roster, self.grid)
    }
}
