//! Kemeny ranking as an annealing problem.

use rand::Rng;

use super::cost::{adjacent_swap_score, full_score, Ranking};
use crate::error::{KemenyError, Result};
use crate::sa::AnnealProblem;
use crate::tournament::WeightMatrix;

/// Ranks the competitors of a [`WeightMatrix`] by adjacent transpositions.
///
/// The search starts from the identity order `0..n`. A move is the position
/// `p` of an adjacent pair `(p, p + 1)` to swap, drawn uniformly from
/// `0..=n-2`.
#[derive(Debug, Clone, Copy)]
pub struct KemenyProblem<'a> {
    weights: &'a WeightMatrix,
}

impl<'a> KemenyProblem<'a> {
    /// Wraps `weights`. Fails for fewer than two competitors, where no swap
    /// exists.
    pub fn new(weights: &'a WeightMatrix) -> Result<Self> {
        if weights.len() < 2 {
            return Err(KemenyError::TooFewCompetitors {
                count: weights.len(),
            });
        }
        Ok(Self { weights })
    }
}

impl AnnealProblem for KemenyProblem<'_> {
    type Solution = Ranking;
    type Move = usize;

    fn initial_solution(&self) -> Ranking {
        (0..self.weights.len()).collect()
    }

    fn cost(&self, ranking: &Ranking) -> u64 {
        full_score(ranking, self.weights)
    }

    fn random_move<R: Rng>(&self, ranking: &Ranking, rng: &mut R) -> usize {
        rng.random_range(0..ranking.len() - 1)
    }

    fn move_cost(&self, ranking: &Ranking, current_cost: u64, position: usize) -> u64 {
        adjacent_swap_score(ranking, current_cost, position, self.weights)
    }

    fn apply_move(&self, ranking: &mut Ranking, position: usize) {
        ranking.swap(position, position + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rejects_trivial_matrices() {
        for n in 0..2 {
            let w = WeightMatrix::zeros(n);
            assert!(matches!(
                KemenyProblem::new(&w),
                Err(KemenyError::TooFewCompetitors { count }) if count == n
            ));
        }
    }

    #[test]
    fn test_initial_solution_is_identity() {
        let w = WeightMatrix::zeros(4);
        let problem = KemenyProblem::new(&w).unwrap();
        assert_eq!(problem.initial_solution(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_moves_cover_every_adjacent_pair() {
        let w = WeightMatrix::zeros(5);
        let problem = KemenyProblem::new(&w).unwrap();
        let ranking = problem.initial_solution();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 4];
        for _ in 0..1_000 {
            let p = problem.random_move(&ranking, &mut rng);
            assert!(p < 4);
            seen[p] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_move_cost_matches_applied_move() {
        let w = WeightMatrix::from_triples(3, [(0, 1, 5), (1, 2, 5), (2, 0, 10)]).unwrap();
        let problem = KemenyProblem::new(&w).unwrap();
        let mut ranking = problem.initial_solution();
        let mut cost = problem.cost(&ranking);
        for position in [1, 0, 1, 0, 1] {
            let next = problem.move_cost(&ranking, cost, position);
            problem.apply_move(&mut ranking, position);
            cost = next;
            assert_eq!(cost, problem.cost(&ranking));
        }
    }
}
