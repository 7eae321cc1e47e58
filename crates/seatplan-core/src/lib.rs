//! # Seatplan Core Library
//!
//! A constrained seating-chart optimizer. People are assigned to the seats of a fixed
//! `rows × cols` grid so that declared "likes" end up adjacent, declared "dislikes" end up
//! apart, and hard zone preferences ("front rows" / "back rows") are honored.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout with a clear separation of concerns:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Roster`, `Grid`, `Assignment`),
//!   the pure adjacency scoring function, and CSV collaborators for rosters and charts.
//!
//! - **[`engine`]: The Logic Core.** The stateful optimization layer: configuration,
//!   the seat constraint checker, the zone-aware initial placement and the hill-climbing
//!   local search.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together into a complete
//!   arrangement run, including independent restarts and the final report.

pub mod core;
pub mod engine;
pub mod workflows;
