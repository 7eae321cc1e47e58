use crate::core::models::assignment::Assignment;
use crate::core::models::grid::Grid;
use crate::core::models::ids::PersonId;
use crate::core::models::roster::{Roster, RosterDiagnostics};
use crate::engine::config::ArrangementConfig;
use crate::engine::context::ArrangementContext;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::Solution;
use crate::engine::tasks;
use crate::engine::tasks::hill_climb::SearchStats;
use crate::engine::tasks::report::ArrangementReport;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone)]
pub struct ArrangementResult {
    pub grid: Grid,
    /// One entry per seat, row-major.
    pub assignment: Assignment,
    pub score: i64,
    /// Score of the winning restart's initial placement.
    pub initial_score: i64,
    /// Index of the restart that produced `assignment`.
    pub restart: usize,
    /// Final score of every restart, by restart index.
    pub restart_scores: Vec<i64>,
    /// Zone-pinned people the winning restart had to seat outside their zone.
    pub relaxed: Vec<PersonId>,
    pub stats: SearchStats,
    pub report: ArrangementReport,
    pub diagnostics: RosterDiagnostics,
}

/// Runs a complete arrangement, seeding the search from `config.search.seed` or, when
/// no seed is configured, from OS entropy.
#[instrument(skip_all, name = "arrangement_workflow")]
pub fn run(
    roster: &Roster,
    config: &ArrangementConfig,
    reporter: &ProgressReporter,
) -> Result<ArrangementResult, EngineError> {
    let mut rng = match config.search.seed {
        Some(seed) => {
            info!(seed, "Seeding search from configuration.");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    run_with_rng(roster, config, reporter, &mut rng)
}

/// Runs a complete arrangement driven by `rng`.
///
/// One seed per restart is drawn from `rng` before any restart starts; each restart then
/// owns a `StdRng` built from its seed, so the outcome does not depend on whether
/// restarts run in parallel.
pub fn run_with_rng(
    roster: &Roster,
    config: &ArrangementConfig,
    reporter: &ProgressReporter,
    rng: &mut impl Rng,
) -> Result<ArrangementResult, EngineError> {
    // === Phase 0: Preparation ===
    reporter.report(Progress::PhaseStart {
        name: "Preparation",
    });
    let grid = config.grid.grid();
    if roster.len() > grid.capacity() {
        return Err(EngineError::CapacityExceeded {
            people: roster.len(),
            capacity: grid.capacity(),
        });
    }

    let diagnostics = roster.diagnose(&grid);
    log_diagnostics(&diagnostics);

    let restarts = config.search.restarts.max(1);
    let seeds: Vec<u64> = (0..restarts).map(|_| rng.r#gen()).collect();
    info!(
        people = roster.len(),
        rows = grid.rows(),
        cols = grid.cols(),
        restarts,
        iterations = config.search.iterations,
        "Starting arrangement."
    );
    reporter.report(Progress::PhaseFinish);

    let context = ArrangementContext::new(roster, &grid, config, reporter);

    // === Phase 1: Placement and hill climbing per restart ===
    reporter.report(Progress::PhaseStart { name: "Searching" });
    reporter.report(Progress::TaskStart {
        total_steps: (config.search.iterations as u64).saturating_mul(restarts as u64),
    });
    let solutions = search_restarts(&context, &seeds)?;
    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    let restart_scores: Vec<i64> = solutions.iter().map(|s| s.score).collect();
    let best = solutions
        .into_iter()
        .max()
        .ok_or_else(|| EngineError::Internal("no restart produced a solution".to_string()))?;

    // === Phase 2: Report ===
    reporter.report(Progress::PhaseStart { name: "Reporting" });
    let report = tasks::report::run(&context, &best.assignment);
    reporter.report(Progress::PhaseFinish);

    info!(
        score = best.score,
        restart = best.restart,
        relaxed = best.relaxed.len(),
        "Arrangement complete."
    );

    Ok(ArrangementResult {
        grid,
        score: best.score,
        initial_score: best.stats.initial_score,
        restart: best.restart,
        restart_scores,
        relaxed: best.relaxed,
        stats: best.stats,
        assignment: best.assignment,
        report,
        diagnostics,
    })
}

fn search_restarts(
    context: &ArrangementContext,
    seeds: &[u64],
) -> Result<Vec<Solution>, EngineError> {
    #[cfg(not(feature = "parallel"))]
    let iterator = seeds.iter();

    #[cfg(feature = "parallel")]
    let iterator = seeds.par_iter();

    iterator
        .enumerate()
        .map(|(restart, &seed)| run_restart(context, restart, seed))
        .collect()
}

#[instrument(skip_all, name = "restart", fields(restart = restart))]
fn run_restart(
    context: &ArrangementContext,
    restart: usize,
    seed: u64,
) -> Result<Solution, EngineError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let placement = tasks::initial_placement::run(context, &mut rng)?;
    let mut assignment = placement.assignment;
    let stats = tasks::hill_climb::run(context, &mut assignment, &mut rng);

    Ok(Solution {
        restart,
        score: stats.final_score,
        assignment,
        relaxed: placement.relaxed,
        stats,
    })
}

fn log_diagnostics(diagnostics: &RosterDiagnostics) {
    for name in &diagnostics.duplicate_names {
        warn!(%name, "Name appears more than once; preferences for it resolve to one holder.");
    }
    for reference in &diagnostics.unknown_references {
        warn!(
            from = %reference.from,
            name = %reference.name,
            "Preference names nobody on the roster and will be ignored."
        );
    }
    if diagnostics.front_overflow > 0 {
        warn!(
            overflow = diagnostics.front_overflow,
            "More front-row requests than front seats."
        );
    }
    if diagnostics.back_overflow > 0 {
        warn!(
            overflow = diagnostics.back_overflow,
            "More back-row requests than back seats."
        );
    }
}
