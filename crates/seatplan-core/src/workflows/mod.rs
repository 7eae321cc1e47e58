//! # Workflows Module
//!
//! High-level entry points that run a complete arrangement from a roster and a
//! configuration.
//!
//! - **Arrangement Workflow** ([`arrange`]) - Zone-aware initial placement followed by
//!   hill climbing, repeated over independent restarts, with a final report.

pub mod arrange;
