use crate::cli::CheckArgs;
use crate::config::PartialArrangementConfig;
use crate::error::{CliError, Result};
use crate::render;
use seatplan::core::io::roster_csv::RosterCsv;
use seatplan::engine::error::EngineError;
use tracing::info;

pub async fn run(args: CheckArgs) -> Result<()> {
    let config = PartialArrangementConfig::load(args.config.as_deref())?
        .merge_with_cli(&args.set_values, (&args).into())?;
    let grid = config.grid.grid();

    info!("Loading roster from {:?}", &args.input);
    let roster = RosterCsv::read_from_path(&args.input).map_err(|source| CliError::Roster {
        path: args.input.clone(),
        source,
    })?;

    let diagnostics = roster.diagnose(&grid);
    print!("{}", render::render_diagnostics(&roster, &grid, &diagnostics));

    if diagnostics.capacity_overflow > 0 {
        return Err(EngineError::CapacityExceeded {
            people: roster.len(),
            capacity: grid.capacity(),
        }
        .into());
    }
    Ok(())
}
