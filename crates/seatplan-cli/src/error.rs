use seatplan::core::io::chart_csv::ChartError;
use seatplan::core::io::roster_csv::RosterError;
use seatplan::engine::config::ConfigError;
use seatplan::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to read roster '{path}': {source}", path = path.display())]
    Roster {
        path: PathBuf,
        #[source]
        source: RosterError,
    },

    #[error("Failed to write chart '{path}': {source}", path = path.display())]
    Chart {
        path: PathBuf,
        #[source]
        source: ChartError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}
