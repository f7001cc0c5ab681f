//! Crate error type.

use std::path::PathBuf;

/// Errors surfaced before a search starts or while loading a tournament.
///
/// The annealing loop itself never fails; everything here is detected up
/// front and returned to the immediate caller.
#[derive(Debug, thiserror::Error)]
pub enum KemenyError {
    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("need at least 2 competitors to rank, got {count}")]
    TooFewCompetitors { count: usize },

    #[error("invalid weight matrix: {0}")]
    InvalidMatrix(String),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl KemenyError {
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        KemenyError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        KemenyError::Parse {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KemenyError>;
