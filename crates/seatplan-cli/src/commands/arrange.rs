use crate::cli::ArrangeArgs;
use crate::config::PartialArrangementConfig;
use crate::error::{CliError, Result};
use crate::render;
use crate::utils::progress::CliProgressHandler;
use seatplan::{
    core::io::{chart_csv::ChartCsv, roster_csv::RosterCsv},
    engine::progress::ProgressReporter,
    workflows,
};
use tracing::info;

pub async fn run(args: ArrangeArgs) -> Result<()> {
    let partial_config = PartialArrangementConfig::load(args.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let final_config = partial_config.merge_with_cli(&args.set_values, (&args).into())?;

    info!("Loading roster from {:?}", &args.input);
    let roster = RosterCsv::read_from_path(&args.input).map_err(|source| CliError::Roster {
        path: args.input.clone(),
        source,
    })?;

    let progress_handler = CliProgressHandler::new();
    let callback = progress_handler.get_callback();

    println!(
        "Arranging {} people on a {}x{} grid...",
        roster.len(),
        final_config.grid.rows,
        final_config.grid.cols
    );
    info!("Invoking the core arrangement workflow...");

    let (roster, result) = tokio::task::spawn_blocking(move || {
        let reporter = ProgressReporter::with_callback(callback);
        let result = workflows::arrange::run(&roster, &final_config, &reporter);
        (roster, result)
    })
    .await
    .map_err(|e| CliError::Other(anyhow::anyhow!("Arrangement task failed: {}", e)))?;
    progress_handler.clear();
    let result = result?;

    info!(score = result.score, "Workflow finished.");
    println!();
    print!(
        "{}",
        render::render_chart(&roster, &result.grid, &result.assignment)
    );
    if args.details {
        println!();
        print!(
            "{}",
            render::render_seat_details(&roster, &result.grid, &result.assignment)
        );
    }
    println!();
    print!("{}", render::render_summary(&roster, &result));

    if let Some(output) = &args.output {
        info!("Writing chart to {:?}", output);
        ChartCsv::write_to_path(&roster, &result.grid, &result.assignment, output).map_err(
            |source| CliError::Chart {
                path: output.clone(),
                source,
            },
        )?;
        println!("✓ Chart written to: {}", output.display());
    }

    Ok(())
}
