//! Crate-wide error taxonomy.
//!
//! Configuration and schema violations are unrecoverable for the call and
//! surface immediately. Per-chromosome bound violations (flank larger than
//! the chromosome) are not errors and yield zero rows instead. Empty-input
//! conditions on the encoding functions are surfaced as [`PrepError::EmptyInput`]
//! so callers can decide whether to abort or skip a batch.

use polars::error::PolarsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PrepError>;

#[derive(Debug, Error)]
pub enum PrepError {
    /// Caller supplied an internally inconsistent parameter combination.
    #[error("incompatible configuration: {0}")]
    Configuration(String),

    /// An expected column is absent from a supplied table.
    #[error("expected column '{column}' not found in {table}")]
    MissingColumn {
        column: &'static str,
        table:  &'static str,
    },

    /// A referenced chromosome has no entry in the size table.
    #[error("chromosome '{0}' not found in the chromosome size table")]
    UnknownChromosome(String),

    /// A required collection argument is empty.
    #[error("'{0}' is empty")]
    EmptyInput(&'static str),

    /// Stranded profiles carry (+, -) channel pairs, so the channel
    /// dimension must be even.
    #[error("stranded profiles require an even channel count, found {0}")]
    UnevenStrandChannels(usize),

    #[error(transparent)]
    Polars(#[from] PolarsError),

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
