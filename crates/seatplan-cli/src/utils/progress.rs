use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use seatplan::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const TICK: Duration = Duration::from_millis(100);
const PHASE_TEMPLATE: &str = "{spinner:.green} {prefix:.bold}";
const SEARCH_TEMPLATE: &str =
    "{prefix:<12.bold} [{bar:40.cyan/blue}] {human_pos}/{human_len} swaps ({per_sec}, {eta} left)";

/// Renders engine progress on stderr.
///
/// Each phase shows a spinner labelled with the phase name; once the search announces its
/// attempt budget the spinner turns into a bar counting swap attempts across all restarts.
/// Zone relaxation notes are printed above the bar.
#[derive(Clone)]
pub struct CliProgressHandler {
    bar: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::drawing_to(ProgressDrawTarget::stderr())
    }

    fn drawing_to(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target);
        bar.finish_and_clear();
        Self {
            bar: Arc::new(Mutex::new(bar)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let bar = Arc::clone(&self.bar);
        Box::new(move |event: Progress| match bar.lock() {
            Ok(bar) => apply(&bar, event),
            Err(_) => warn!("Progress bar lock poisoned; dropping progress event."),
        })
    }

    /// Removes the bar so the chart prints on a clean terminal.
    pub fn clear(&self) {
        if let Ok(bar) = self.bar.lock() {
            bar.finish_and_clear();
        }
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn apply(bar: &ProgressBar, event: Progress) {
    match event {
        Progress::PhaseStart { name } => {
            bar.reset();
            bar.set_length(0);
            bar.set_style(style(PHASE_TEMPLATE));
            bar.set_prefix(name);
            bar.set_message("");
            bar.enable_steady_tick(TICK);
        }
        Progress::TaskStart { total_steps } => {
            bar.disable_steady_tick();
            bar.set_style(style(SEARCH_TEMPLATE).progress_chars("=> "));
            bar.set_length(total_steps);
            bar.set_position(0);
        }
        Progress::TaskAdvance { steps } => bar.inc(steps),
        Progress::TaskFinish => {
            if let Some(total) = bar.length() {
                bar.set_position(total);
            }
        }
        Progress::PhaseFinish => {
            bar.disable_steady_tick();
            let phase = bar.prefix();
            bar.finish_with_message(format!("{phase} finished"));
        }
        Progress::Message(note) => bar.println(format!("  note: {note}")),
    }
}

fn style(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template).unwrap_or_else(|_| ProgressStyle::default_bar())
}
