//! Near-optimal Kemeny rankings of weighted tournaments.
//!
//! Given an n×n matrix of pairwise weights (how strongly each competitor
//! beat each other one), finds a total order whose Kemeny score, the total
//! weight of results the order contradicts, is as low as possible. The exact
//! problem is NP-hard; this crate anneals over adjacent transpositions.
//!
//! - **SA (`sa`)**: Simulated annealing over any [`sa::AnnealProblem`] with
//!   incremental move costs, Metropolis acceptance, geometric per-epoch
//!   cooling and a stagnation stop.
//! - **Kemeny (`kemeny`)**: Full and O(1) incremental Kemeny scores, and the
//!   ranking problem the annealer searches.
//! - **Tournament (`tournament`)**: The weight matrix and a loader for the
//!   plain-text tournament format.
//! - **Report (`report`)**: Ranked-list output.
//!
//! # Architecture
//!
//! The annealing core (`sa` + `kemeny`) is pure and synchronous: no I/O, no
//! global random state. The random source is passed in by the caller, so a
//! run is reproducible from its seed. Loading files and printing results
//! live in `tournament`, `report` and the `kemeny-anneal` binary.

pub mod cli;
pub mod error;
pub mod kemeny;
pub mod report;
pub mod sa;
pub mod tournament;

pub use error::{KemenyError, Result};
