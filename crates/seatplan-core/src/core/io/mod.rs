//! File collaborators around the optimizer.
//!
//! The optimizer itself never touches files. This module reads participant rosters from
//! CSV and writes finished seating charts back to CSV, so front ends can share one
//! implementation of both formats.

pub mod chart_csv;
pub mod roster_csv;
