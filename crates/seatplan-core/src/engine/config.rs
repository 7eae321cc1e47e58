use crate::core::models::grid::Grid;
use crate::core::scoring::ScoreWeights;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    /// Number of rows in each of the front and back zones.
    pub zone_depth: usize,
}

impl GridConfig {
    pub fn grid(&self) -> Grid {
        Grid::new(self.rows, self.cols, self.zone_depth)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Swap attempts per restart. Every attempt counts, including void and illegal draws.
    pub iterations: usize,
    /// Independent placement + hill-climb runs; the best one is kept.
    pub restarts: usize,
    /// Seed for reproducible runs. `None` draws a seed from system entropy.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrangementConfig {
    pub grid: GridConfig,
    pub scoring: ScoreWeights,
    pub search: SearchConfig,
}

#[derive(Default)]
pub struct ArrangementConfigBuilder {
    rows: Option<usize>,
    cols: Option<usize>,
    zone_depth: Option<usize>,
    like_weight: Option<i64>,
    dislike_weight: Option<i64>,
    iterations: Option<usize>,
    restarts: Option<usize>,
    seed: Option<u64>,
}

impl ArrangementConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }
    pub fn cols(mut self, cols: usize) -> Self {
        self.cols = Some(cols);
        self
    }
    pub fn zone_depth(mut self, depth: usize) -> Self {
        self.zone_depth = Some(depth);
        self
    }
    pub fn like_weight(mut self, weight: i64) -> Self {
        self.like_weight = Some(weight);
        self
    }
    pub fn dislike_weight(mut self, weight: i64) -> Self {
        self.dislike_weight = Some(weight);
        self
    }
    pub fn score_weights(self, weights: ScoreWeights) -> Self {
        self.like_weight(weights.like).dislike_weight(weights.dislike)
    }
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }
    /// Defaults to a single run when not set.
    pub fn restarts(mut self, restarts: usize) -> Self {
        self.restarts = Some(restarts);
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<ArrangementConfig, ConfigError> {
        let grid = GridConfig {
            rows: self.rows.ok_or(ConfigError::MissingParameter("rows"))?,
            cols: self.cols.ok_or(ConfigError::MissingParameter("cols"))?,
            zone_depth: self
                .zone_depth
                .ok_or(ConfigError::MissingParameter("zone_depth"))?,
        };
        if grid.rows == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "rows",
                reason: "grid must have at least one row".to_string(),
            });
        }
        if grid.cols == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "cols",
                reason: "grid must have at least one column".to_string(),
            });
        }

        let scoring = ScoreWeights {
            like: self
                .like_weight
                .ok_or(ConfigError::MissingParameter("like_weight"))?,
            dislike: self
                .dislike_weight
                .ok_or(ConfigError::MissingParameter("dislike_weight"))?,
        };

        let restarts = self.restarts.unwrap_or(1);
        if restarts == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "restarts",
                reason: "at least one run is required".to_string(),
            });
        }
        let search = SearchConfig {
            iterations: self
                .iterations
                .ok_or(ConfigError::MissingParameter("iterations"))?,
            restarts,
            seed: self.seed,
        };

        Ok(ArrangementConfig {
            grid,
            scoring,
            search,
        })
    }
}
