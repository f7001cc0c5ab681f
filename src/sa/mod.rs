//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases as the temperature falls, allowing the search to escape
//! local optima early and settle late.
//!
//! Moves are scored incrementally and applied in place only when accepted.
//! The run ends after a fixed number of consecutive moves without a new
//! best solution, optionally capped by a total move budget.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;
mod types;

pub use config::AnnealConfig;
pub use runner::{AnnealResult, AnnealRunner, StopReason};
pub use types::AnnealProblem;
