//! Pipeline error type.

use finkpi_data::DataError;
use finkpi_output::ExportError;
use finkpi_ratios::RatioError;
use thiserror::Error;

/// Result type for pipeline stages.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Any failure that aborts a pipeline stage.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Fetching, reading or parsing raw statements failed
    #[error(transparent)]
    Data(#[from] DataError),

    /// Cleaning or merging failed
    #[error(transparent)]
    Ratio(#[from] RatioError),

    /// Writing processed tables failed
    #[error(transparent)]
    Export(#[from] ExportError),
}
