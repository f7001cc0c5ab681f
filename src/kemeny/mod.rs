//! Kemeny ranking of weighted tournaments.
//!
//! Finds a total order of competitors that minimizes the Kemeny score: the
//! total weight of pairwise results the order contradicts. Equivalent to
//! weighted minimum feedback arc set, so the search is heuristic.
//!
//! # Examples
//!
//! ```
//! use kemeny_anneal::kemeny::solve;
//! use kemeny_anneal::sa::AnnealConfig;
//! use kemeny_anneal::tournament::WeightMatrix;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! // A beats B (5), B beats C (5), C beats A (10).
//! let w = WeightMatrix::from_triples(3, [(0, 1, 5), (1, 2, 5), (2, 0, 10)]).unwrap();
//! let config = AnnealConfig::new(10.0, 100, 0.95, 5_000);
//! let result = solve(&w, &config, &mut StdRng::seed_from_u64(3)).unwrap();
//! assert_eq!(result.best_score, 5);
//! ```

mod cost;
mod problem;

pub use cost::{adjacent_swap, adjacent_swap_score, full_score, is_permutation, Ranking};
pub use problem::KemenyProblem;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rand::Rng;

use crate::error::Result;
use crate::sa::{AnnealConfig, AnnealResult, AnnealRunner};
use crate::tournament::WeightMatrix;

/// Anneals a ranking of the competitors in `weights`.
///
/// Fails before searching if the configuration is invalid or there are
/// fewer than two competitors.
pub fn solve<R: Rng>(
    weights: &WeightMatrix,
    config: &AnnealConfig,
    rng: &mut R,
) -> Result<AnnealResult<Ranking>> {
    let problem = KemenyProblem::new(weights)?;
    let _span = tracing::info_span!("kemeny", competitors = weights.len()).entered();
    AnnealRunner::run(&problem, config, rng)
}

/// Like [`solve`], but stops early with [`StopReason::Cancelled`] once
/// `cancel` is raised. The flag is checked at epoch boundaries, so a
/// wrapping layer can impose a deadline on an otherwise unbounded run.
///
/// [`StopReason::Cancelled`]: crate::sa::StopReason::Cancelled
pub fn solve_with_cancel<R: Rng>(
    weights: &WeightMatrix,
    config: &AnnealConfig,
    rng: &mut R,
    cancel: Arc<AtomicBool>,
) -> Result<AnnealResult<Ranking>> {
    let problem = KemenyProblem::new(weights)?;
    let _span = tracing::info_span!("kemeny", competitors = weights.len()).entered();
    AnnealRunner::run_with_cancel(&problem, config, rng, Some(cancel))
}

/// Like [`solve`], with an RNG seeded from `config.seed` (or entropy).
pub fn solve_seeded(weights: &WeightMatrix, config: &AnnealConfig) -> Result<AnnealResult<Ranking>> {
    let problem = KemenyProblem::new(weights)?;
    let _span = tracing::info_span!("kemeny", competitors = weights.len()).entered();
    AnnealRunner::run_seeded(&problem, config)
}
