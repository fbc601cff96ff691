#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/finkpi/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod pipeline;

// Re-export main types from sub-crates
pub use finkpi_data as data;
pub use finkpi_output as output;
pub use finkpi_ratios as ratios;

pub use error::{PipelineError, Result};
pub use finkpi_data::{Config, StatementKind};
pub use pipeline::{KpiTables, MERGED_TABLE, calculate_kpis, fetch_financials, transform};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
