//! Error types for the PIMC engine.

use thiserror::Error;

/// Errors raised while building a simulation or handling its inputs/outputs.
///
/// The sampling loop itself never fails; these cover construction,
/// configuration and file output only.
#[derive(Error, Debug)]
pub enum PimcError {
    #[error("segment count must be at least 1, got {0}")]
    InvalidSegments(usize),

    #[error("unsupported potential id {0} (1: harmonic, 2: Morse, 3: double-well, 4: anharmonic)")]
    UnsupportedPotential(i64),

    #[error("unknown potential name '{0}'")]
    UnknownPotential(String),

    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PimcError>;
