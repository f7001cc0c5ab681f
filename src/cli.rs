//! Command-line arguments for the `kemeny-anneal` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::sa::AnnealConfig;

/// Rank the competitors of a tournament file by simulated annealing.
///
/// Defaults reproduce [`AnnealConfig::reference`].
#[derive(Debug, Clone, Parser)]
#[command(name = "kemeny-anneal")]
#[command(version)]
pub struct CliArgs {
    /// Tournament file
    pub file: PathBuf,

    /// Random seed for reproducibility (default: from entropy)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial temperature
    #[arg(long, default_value_t = 1.0)]
    pub temperature: f64,

    /// Moves per temperature step
    #[arg(long, default_value_t = 2000)]
    pub epoch: usize,

    /// Cooling rate in (0, 1)
    #[arg(long, default_value_t = 0.99)]
    pub cooling: f64,

    /// Stop after this many moves without improvement
    #[arg(long, default_value_t = 50_000)]
    pub stagnation: usize,

    /// Hard ceiling on total moves
    #[arg(long)]
    pub max_moves: Option<usize>,
}

impl CliArgs {
    /// Builds and validates the annealing configuration.
    pub fn config(&self) -> Result<AnnealConfig> {
        let mut config =
            AnnealConfig::new(self.temperature, self.epoch, self.cooling, self.stagnation);
        config.seed = self.seed;
        config.max_moves = self.max_moves;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KemenyError;

    fn parse(args: &[&str]) -> std::result::Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("kemeny-anneal").chain(args.iter().copied()))
    }

    #[test]
    fn test_file_only_uses_reference_config() {
        let args = parse(&["games.txt"]).unwrap();
        assert_eq!(args.file, PathBuf::from("games.txt"));
        assert_eq!(args.config().unwrap(), AnnealConfig::reference());
    }

    #[test]
    fn test_all_flags() {
        let args = parse(&[
            "--seed",
            "11",
            "games.txt",
            "--temperature",
            "2.5",
            "--epoch",
            "300",
            "--cooling",
            "0.9",
            "--stagnation",
            "1000",
            "--max-moves",
            "99999",
        ])
        .unwrap();
        let c = args.config().unwrap();
        assert_eq!(c.seed, Some(11));
        assert!((c.initial_temperature - 2.5).abs() < 1e-12);
        assert_eq!(c.epoch_length, 300);
        assert!((c.cooling_rate - 0.9).abs() < 1e-12);
        assert_eq!(c.stagnation_limit, 1000);
        assert_eq!(c.max_moves, Some(99_999));
    }

    #[test]
    fn test_help_requested() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_missing_file() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_unknown_flag() {
        assert!(parse(&["a.txt", "--fast"]).is_err());
    }

    #[test]
    fn test_extra_positional() {
        assert!(parse(&["a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn test_bad_value() {
        assert!(parse(&["a.txt", "--epoch", "many"]).is_err());
    }

    #[test]
    fn test_invalid_config_reported() {
        let args = parse(&["a.txt", "--cooling", "1.2"]).unwrap();
        assert!(matches!(
            args.config(),
            Err(KemenyError::InvalidConfig {
                field: "cooling_rate",
                ..
            })
        ));
    }
}
