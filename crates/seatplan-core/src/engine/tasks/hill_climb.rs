use crate::core::models::assignment::Assignment;
use crate::engine::context::ArrangementContext;
use crate::engine::progress::Progress;
use rand::Rng;
use tracing::{debug, instrument, trace};

/// Attempts between two `TaskAdvance` progress events.
const PROGRESS_STRIDE: usize = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Both draws hit the same seat.
    Void,
    /// The swap would move someone into a seat they may not occupy.
    Illegal,
    /// The swap was tried and reverted because it did not raise the score.
    Rejected,
    Accepted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    pub attempts: usize,
    pub void_draws: usize,
    pub illegal_swaps: usize,
    pub rejected_swaps: usize,
    pub accepted_swaps: usize,
    pub initial_score: i64,
    pub final_score: i64,
}

impl SearchStats {
    fn record(&mut self, outcome: AttemptOutcome) {
        self.attempts += 1;
        match outcome {
            AttemptOutcome::Void => self.void_draws += 1,
            AttemptOutcome::Illegal => self.illegal_swaps += 1,
            AttemptOutcome::Rejected => self.rejected_swaps += 1,
            AttemptOutcome::Accepted => self.accepted_swaps += 1,
        }
    }
}

#[instrument(skip_all, name = "hill_climb_task")]
pub fn run(
    context: &ArrangementContext,
    assignment: &mut Assignment,
    rng: &mut impl Rng,
) -> SearchStats {
    run_observed(context, assignment, rng, |_, _, _| {})
}

/// Strict hill climbing over random seat swaps.
///
/// Performs exactly `search.iterations` attempts. Each attempt draws two seats uniformly;
/// identical draws are void, swaps that break a zone preference are discarded, and any
/// other swap is applied, rescored, and kept only if the score strictly increases.
/// `observe` is called after every attempt with its outcome, the tracked score and the
/// assignment as it stands.
pub fn run_observed<F>(
    context: &ArrangementContext,
    assignment: &mut Assignment,
    rng: &mut impl Rng,
    mut observe: F,
) -> SearchStats
where
    F: FnMut(AttemptOutcome, i64, &Assignment),
{
    let iterations = context.config.search.iterations;
    let capacity = assignment.len();
    let scorer = context.scorer();
    let rules = context.rules();

    let mut current_score = scorer.score(assignment);
    let mut stats = SearchStats {
        initial_score: current_score,
        ..SearchStats::default()
    };

    for attempt in 0..iterations {
        let outcome = if capacity < 2 {
            AttemptOutcome::Void
        } else {
            let i = rng.gen_range(0..capacity);
            let j = rng.gen_range(0..capacity);

            if i == j {
                AttemptOutcome::Void
            } else if !rules.swap_is_legal(assignment, i, j) {
                AttemptOutcome::Illegal
            } else {
                assignment.swap(i, j);
                let new_score = scorer.score(assignment);
                if new_score > current_score {
                    trace!(attempt, from = current_score, to = new_score, "Swap accepted.");
                    current_score = new_score;
                    AttemptOutcome::Accepted
                } else {
                    assignment.swap(i, j);
                    AttemptOutcome::Rejected
                }
            }
        };

        stats.record(outcome);
        observe(outcome, current_score, assignment);

        if (attempt + 1) % PROGRESS_STRIDE == 0 {
            context.reporter.report(Progress::TaskAdvance {
                steps: PROGRESS_STRIDE as u64,
            });
        }
    }

    let remainder = iterations % PROGRESS_STRIDE;
    if remainder > 0 {
        context.reporter.report(Progress::TaskAdvance {
            steps: remainder as u64,
        });
    }

    stats.final_score = current_score;
    debug!(
        attempts = stats.attempts,
        accepted = stats.accepted_swaps,
        initial_score = stats.initial_score,
        final_score = stats.final_score,
        "Hill climb finished."
    );
    stats
}
