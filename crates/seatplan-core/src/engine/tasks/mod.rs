//! The computational steps of one arrangement run.
//!
//! Each task takes an [`ArrangementContext`](super::context::ArrangementContext) plus
//! whatever mutable state it works on: initial placement builds a starting assignment,
//! hill climbing improves it, and the report summarizes the result.

pub mod hill_climb;
pub mod initial_placement;
pub mod report;
