//! # Engine Module
//!
//! The optimization layer of the seating planner.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Grid shape, scoring weights and search parameters
//! - **Constraints** ([`constraints`]) - Which person may occupy which seat
//! - **State Tracking** ([`state`]) - Finished solutions and how they rank
//! - **Progress Monitoring** ([`progress`]) - Phase and task events for front ends
//! - **Error Handling** ([`error`]) - Engine-specific error types
//! - **Tasks** ([`tasks`]) - Initial placement, hill climbing and reporting
//!
//! Tasks share their read-only inputs through [`context::ArrangementContext`].

pub mod config;
pub mod constraints;
pub mod context;
pub mod error;
pub mod progress;
pub mod state;
pub mod tasks;
