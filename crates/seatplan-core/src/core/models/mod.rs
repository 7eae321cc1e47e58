//! Data structures describing who is seated and where.
//!
//! - [`grid`] - seat geometry, adjacency and the front/middle/back zone partition
//! - [`person`] - a single participant and their preferences
//! - [`roster`] - the immutable set of participants for one run
//! - [`assignment`] - the seat-to-person mapping mutated by the optimizer
//! - [`ids`] - stable identifiers for participants

pub mod assignment;
pub mod grid;
pub mod ids;
pub mod person;
pub mod roster;
