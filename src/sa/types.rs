//! Core trait for annealing with incremental costs.

use rand::Rng;

/// Defines a problem the annealing runner can search.
///
/// Moves are proposed as small values and scored incrementally before
/// anything is changed; the runner applies a move to its current solution
/// only once it is accepted. This keeps a step cheap when the cost of a
/// neighbor can be derived from the current cost in constant time.
///
/// Costs are non-negative integers. Lower is better.
///
/// # Contract
///
/// For any solution `s` with true cost `c` and any move `m` returned by
/// [`random_move`](Self::random_move), `move_cost(s, c, m)` must equal
/// `cost` of `s` after `apply_move(s, m)`.
pub trait AnnealProblem {
    /// The solution representation type.
    type Solution: Clone;

    /// A proposed local change to a solution.
    type Move: Copy;

    /// The solution the search starts from.
    fn initial_solution(&self) -> Self::Solution;

    /// Computes the cost of a solution from scratch.
    fn cost(&self, solution: &Self::Solution) -> u64;

    /// Draws a random move applicable to `solution`.
    fn random_move<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Move;

    /// Cost of `solution` after applying `mv`, given its current cost.
    fn move_cost(&self, solution: &Self::Solution, current_cost: u64, mv: Self::Move) -> u64;

    /// Applies `mv` to `solution` in place.
    fn apply_move(&self, solution: &mut Self::Solution, mv: Self::Move);
}
