use seatplan::core::scoring::{DEFAULT_DISLIKE_WEIGHT, DEFAULT_LIKE_WEIGHT};

/// Values used for any setting that neither the command line, `--set` nor the
/// configuration file provides.
pub struct DefaultsConfig {
    pub rows: usize,
    pub cols: usize,
    pub zone_depth: usize,
    pub like: i64,
    pub dislike: i64,
    pub iterations: usize,
    pub restarts: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 5,
            zone_depth: 2,
            like: DEFAULT_LIKE_WEIGHT,
            dislike: DEFAULT_DISLIKE_WEIGHT,
            iterations: 20_000,
            restarts: 1,
        }
    }
}
