pub mod defaults;

use crate::cli::{ArrangeArgs, CheckArgs, GridArgs};
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use seatplan::engine::config::{ArrangementConfig, ArrangementConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialGridConfig {
    rows: Option<usize>,
    cols: Option<usize>,
    zone_depth: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialScoringConfig {
    like: Option<i64>,
    dislike: Option<i64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSearchConfig {
    iterations: Option<usize>,
    restarts: Option<usize>,
    seed: Option<u64>,
}

/// Settings taken from the command line proper, which outrank everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub grid: GridArgs,
    pub iterations: Option<usize>,
    pub restarts: Option<usize>,
    pub seed: Option<u64>,
}

impl From<&ArrangeArgs> for CliOverrides {
    fn from(args: &ArrangeArgs) -> Self {
        Self {
            grid: args.grid,
            iterations: args.iterations,
            restarts: args.restarts,
            seed: args.seed,
        }
    }
}

impl From<&CheckArgs> for CliOverrides {
    fn from(args: &CheckArgs) -> Self {
        Self {
            grid: args.grid,
            ..Self::default()
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialArrangementConfig {
    grid: Option<PartialGridConfig>,
    scoring: Option<PartialScoringConfig>,
    search: Option<PartialSearchConfig>,
}

impl PartialArrangementConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads `path` when given, otherwise starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolves every setting with the precedence command line, then `--set`, then the
    /// configuration file, then [`DefaultsConfig`].
    pub fn merge_with_cli(
        mut self,
        set_values: &[String],
        overrides: CliOverrides,
    ) -> Result<ArrangementConfig> {
        self.apply_set_values(set_values)?;

        let defaults = DefaultsConfig::default();
        let grid = self.grid.take().unwrap_or_default();
        let scoring = self.scoring.take().unwrap_or_default();
        let search = self.search.take().unwrap_or_default();

        let config = ArrangementConfigBuilder::new()
            .rows(overrides.grid.rows.or(grid.rows).unwrap_or(defaults.rows))
            .cols(overrides.grid.cols.or(grid.cols).unwrap_or(defaults.cols))
            .zone_depth(
                overrides
                    .grid
                    .zone_depth
                    .or(grid.zone_depth)
                    .unwrap_or(defaults.zone_depth),
            )
            .like_weight(scoring.like.unwrap_or(defaults.like))
            .dislike_weight(scoring.dislike.unwrap_or(defaults.dislike))
            .iterations(
                overrides
                    .iterations
                    .or(search.iterations)
                    .unwrap_or(defaults.iterations),
            )
            .restarts(
                overrides
                    .restarts
                    .or(search.restarts)
                    .unwrap_or(defaults.restarts),
            )
            .seed(overrides.seed.or(search.seed))
            .build()?;

        debug!("Final arrangement configuration: {:?}", config);
        Ok(config)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let key = key.trim();
            let value_str = value_str.trim();

            match key {
                "grid.rows" => {
                    self.grid.get_or_insert_with(Default::default).rows =
                        Some(parse_value(key, value_str)?);
                }
                "grid.cols" => {
                    self.grid.get_or_insert_with(Default::default).cols =
                        Some(parse_value(key, value_str)?);
                }
                "grid.zone-depth" => {
                    self.grid.get_or_insert_with(Default::default).zone_depth =
                        Some(parse_value(key, value_str)?);
                }
                "scoring.like" => {
                    self.scoring.get_or_insert_with(Default::default).like =
                        Some(parse_value(key, value_str)?);
                }
                "scoring.dislike" => {
                    self.scoring.get_or_insert_with(Default::default).dislike =
                        Some(parse_value(key, value_str)?);
                }
                "search.iterations" => {
                    self.search.get_or_insert_with(Default::default).iterations =
                        Some(parse_value(key, value_str)?);
                }
                "search.restarts" => {
                    self.search.get_or_insert_with(Default::default).restarts =
                        Some(parse_value(key, value_str)?);
                }
                "search.seed" => {
                    self.search.get_or_insert_with(Default::default).seed =
                        Some(parse_value(key, value_str)?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid integer value for {}: {}", key, value)))
}
