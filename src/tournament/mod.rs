//! Tournament data: competitor names and pairwise weights.
//!
//! The [`WeightMatrix`] is the only input the annealing core needs. The
//! loader reads the plain-text tournament format into a [`Tournament`].

mod loader;
mod matrix;

pub use loader::{load_tournament, parse_tournament, Tournament};
pub use matrix::WeightMatrix;
