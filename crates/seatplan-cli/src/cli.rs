use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Seatplan Contributors",
    version,
    about = "seatplan - Build seating charts that keep friends together, keep rivals apart and honor front/back row requests.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to run restarts in parallel.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Optimize a seating chart for a roster.
    Arrange(ArrangeArgs),
    /// Inspect a roster for problems without optimizing.
    Check(CheckArgs),
}

/// Grid shape overrides shared by every subcommand.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct GridArgs {
    /// Override the number of seat rows.
    #[arg(long, value_name = "INT")]
    pub rows: Option<usize>,

    /// Override the number of seats per row.
    #[arg(long, value_name = "INT")]
    pub cols: Option<usize>,

    /// Override how many rows make up the front and the back zone.
    #[arg(long, value_name = "INT")]
    pub zone_depth: Option<usize>,
}

/// Arguments for the `arrange` subcommand.
#[derive(Args, Debug)]
pub struct ArrangeArgs {
    // --- Core Arguments ---
    /// Path to the roster CSV (number, name, likes, dislikes, zone, note).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Write the finished chart as CSV to this path.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub grid: GridArgs,

    /// Also list every seat with its occupant's number, note and preferences.
    #[arg(short, long)]
    pub details: bool,

    // --- Search Overrides ---
    /// Override the number of swap attempts per restart.
    #[arg(short = 'n', long, value_name = "INT")]
    pub iterations: Option<usize>,

    /// Seed the search for a reproducible chart.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Override the number of independent restarts; the best chart is kept.
    #[arg(short, long, value_name = "INT")]
    pub restarts: Option<usize>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S scoring.like=30
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the roster CSV.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub grid: GridArgs,

    /// Set a specific configuration value, overriding the config file.
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
