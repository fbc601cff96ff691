//! Error types for ratio derivation and merging.

use thiserror::Error;

/// Result type for ratio operations.
pub type Result<T> = std::result::Result<T, RatioError>;

/// Errors raised while cleaning or merging statements.
///
/// Missing operand columns are not errors; they are treated as zero.
#[derive(Debug, Error)]
pub enum RatioError {
    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// A column required for joining is absent
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}
