//! # Core Module
//!
//! The fundamental building blocks of seatplan: the data model for people and seats,
//! the adjacency scoring function, and file collaborators.
//!
//! ## Architecture
//!
//! - **Models** ([`models`]) - Grid geometry and zones, people, the roster and the seat assignment
//! - **Scoring** ([`scoring`]) - The pure like/dislike adjacency score of an assignment
//! - **File I/O** ([`io`]) - Reading rosters from CSV and writing finished charts back to CSV
//!
//! Nothing in this module holds optimization state; everything here is either plain data
//! or a pure function over it.

pub mod io;
pub mod models;
pub mod scoring;
