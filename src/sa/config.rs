//! Annealing configuration.

use crate::error::{KemenyError, Result};

/// Configuration for an annealing run.
///
/// The four schedule parameters are required and have no defaults; use
/// [`AnnealConfig::new`] or [`AnnealConfig::reference`]. The remaining
/// fields are optional and adjusted with the `with_*` setters.
///
/// Cooling is geometric and applied once per epoch:
/// `T_{k+1} = cooling_rate * T_k`.
///
/// # Examples
///
/// ```
/// use kemeny_anneal::sa::AnnealConfig;
///
/// let config = AnnealConfig::new(1.0, 2000, 0.99, 50_000)
///     .with_max_moves(10_000_000)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Starting temperature. Must be positive and finite.
    pub initial_temperature: f64,

    /// Moves evaluated at each temperature before cooling.
    pub epoch_length: usize,

    /// Multiplicative temperature decay per epoch, in (0, 1).
    pub cooling_rate: f64,

    /// Consecutive moves without a new best score before the run stops.
    pub stagnation_limit: usize,

    /// Hard ceiling on total moves. `None` = stop on stagnation only.
    pub max_moves: Option<usize>,

    /// Seed for [`AnnealRunner::run_seeded`](super::AnnealRunner::run_seeded).
    /// Ignored when the caller passes its own RNG.
    pub seed: Option<u64>,

    /// Best score is sampled into the history every this many moves.
    /// `None` samples once per epoch.
    pub history_interval: Option<usize>,
}

impl AnnealConfig {
    pub fn new(
        initial_temperature: f64,
        epoch_length: usize,
        cooling_rate: f64,
        stagnation_limit: usize,
    ) -> Self {
        Self {
            initial_temperature,
            epoch_length,
            cooling_rate,
            stagnation_limit,
            max_moves: None,
            seed: None,
            history_interval: None,
        }
    }

    /// Parameters of the reference tournament solver: `T_0 = 1`, epochs of
    /// 2000 moves, cooling rate 0.99, stop after 50000 stagnant moves.
    pub fn reference() -> Self {
        Self::new(1.0, 2000, 0.99, 50_000)
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_epoch_length(mut self, n: usize) -> Self {
        self.epoch_length = n;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_stagnation_limit(mut self, n: usize) -> Self {
        self.stagnation_limit = n;
        self
    }

    pub fn with_max_moves(mut self, n: usize) -> Self {
        self.max_moves = Some(n);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = Some(n);
        self
    }

    /// Effective history sampling interval.
    pub(crate) fn history_every(&self) -> usize {
        self.history_interval.unwrap_or(self.epoch_length)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let t = self.initial_temperature;
        if !t.is_finite() || t <= 0.0 {
            return Err(KemenyError::config(
                "initial_temperature",
                format!("must be positive and finite, got {t}"),
            ));
        }
        if self.epoch_length == 0 {
            return Err(KemenyError::config("epoch_length", "must be at least 1"));
        }
        let rate = self.cooling_rate;
        if !(rate > 0.0 && rate < 1.0) {
            return Err(KemenyError::config(
                "cooling_rate",
                format!("must be in (0, 1), got {rate}"),
            ));
        }
        if self.stagnation_limit == 0 {
            return Err(KemenyError::config("stagnation_limit", "must be at least 1"));
        }
        if self.max_moves == Some(0) {
            return Err(KemenyError::config("max_moves", "must be at least 1 when set"));
        }
        if self.history_interval == Some(0) {
            return Err(KemenyError::config(
                "history_interval",
                "must be at least 1 when set",
            ));
        }
        Ok(())
    }
}
