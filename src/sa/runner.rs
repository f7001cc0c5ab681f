//! Annealing execution loop.
//!
//! # Algorithm
//!
//! 1. Start from the problem's initial solution; best = current.
//! 2. Repeat:
//!    a. Draw a random move and score it incrementally.
//!    b. Metropolis rule: accept if the cost does not rise, otherwise with
//!    probability `exp(-delta / T)`.
//!    c. On a new best, snapshot it and reset the stagnation counter;
//!    otherwise count the move as stagnant.
//!    d. Stop once `stagnation_limit` consecutive moves found no new best.
//!    e. After every `epoch_length` moves, `T *= cooling_rate`.
//! 3. Return the best solution.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::AnnealConfig;
use super::types::AnnealProblem;
use crate::error::Result;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// `stagnation_limit` consecutive moves without a new best.
    Stagnated,
    /// The optional `max_moves` ceiling was reached.
    MoveLimit,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Result of an annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_score: u64,

    /// Total number of moves evaluated.
    pub moves: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of moves that strictly lowered the current cost.
    pub improving_moves: usize,

    /// Number of cooling steps applied.
    pub epochs: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Why the run stopped.
    pub stop_reason: StopReason,

    /// Best score sampled at the start, every history interval, and at the end.
    pub score_history: Vec<u64>,
}

impl<S: Clone> AnnealResult<S> {
    /// Fraction of evaluated moves that were accepted.
    pub fn acceptance_ratio(&self) -> f64 {
        if self.moves == 0 {
            0.0
        } else {
            self.accepted_moves as f64 / self.moves as f64
        }
    }
}

/// Executes simulated annealing.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs annealing with a caller-supplied random source.
    pub fn run<P, R>(
        problem: &P,
        config: &AnnealConfig,
        rng: &mut R,
    ) -> Result<AnnealResult<P::Solution>>
    where
        P: AnnealProblem,
        R: Rng,
    {
        Self::run_with_cancel(problem, config, rng, None)
    }

    /// Runs annealing with an RNG seeded from `config.seed`, or from entropy
    /// when no seed is set.
    pub fn run_seeded<P: AnnealProblem>(
        problem: &P,
        config: &AnnealConfig,
    ) -> Result<AnnealResult<P::Solution>> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_cancel(problem, config, &mut rng, None)
    }

    /// Runs annealing with an optional cancellation flag.
    ///
    /// The flag is polled before the first move and at every epoch boundary.
    pub fn run_with_cancel<P, R>(
        problem: &P,
        config: &AnnealConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealResult<P::Solution>>
    where
        P: AnnealProblem,
        R: Rng,
    {
        config.validate()?;

        let mut current = problem.initial_solution();
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut stagnant = 0usize;
        let mut epoch_moves = 0usize;

        let mut moves = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut epochs = 0usize;

        let history_interval = config.history_every();
        let mut score_history = vec![best_cost];

        tracing::debug!(
            initial_score = current_cost,
            temperature,
            epoch_length = config.epoch_length,
            cooling_rate = config.cooling_rate,
            stagnation_limit = config.stagnation_limit,
            "annealing started"
        );

        let stop_reason = loop {
            if epoch_moves == 0 {
                if let Some(ref flag) = cancel {
                    if flag.load(Ordering::Relaxed) {
                        break StopReason::Cancelled;
                    }
                }
            }
            if config.max_moves.is_some_and(|limit| moves >= limit) {
                break StopReason::MoveLimit;
            }

            let mv = problem.random_move(&current, rng);
            let candidate_cost = problem.move_cost(&current, current_cost, mv);

            // Metropolis acceptance criterion
            let accept = if candidate_cost <= current_cost {
                if candidate_cost < current_cost {
                    improving_moves += 1;
                }
                true
            } else {
                let delta = (candidate_cost - current_cost) as f64;
                rng.random::<f64>() < (-delta / temperature).exp()
            };

            if accept {
                problem.apply_move(&mut current, mv);
                current_cost = candidate_cost;
                accepted_moves += 1;
            }

            moves += 1;

            if current_cost < best_cost {
                best.clone_from(&current);
                best_cost = current_cost;
                stagnant = 0;
            } else {
                stagnant += 1;
            }

            if moves.is_multiple_of(history_interval) {
                score_history.push(best_cost);
            }

            if stagnant == config.stagnation_limit {
                break StopReason::Stagnated;
            }

            epoch_moves += 1;
            if epoch_moves == config.epoch_length {
                temperature *= config.cooling_rate;
                epoch_moves = 0;
                epochs += 1;
                tracing::trace!(epochs, temperature, best_cost, current_cost, "cooled");
            }
        };

        if score_history.last() != Some(&best_cost) {
            score_history.push(best_cost);
        }

        tracing::debug!(
            best_score = best_cost,
            moves,
            accepted_moves,
            epochs,
            final_temperature = temperature,
            ?stop_reason,
            "annealing finished"
        );

        Ok(AnnealResult {
            best,
            best_score: best_cost,
            moves,
            accepted_moves,
            improving_moves,
            epochs,
            final_temperature: temperature,
            stop_reason,
            score_history,
        })
    }
}
