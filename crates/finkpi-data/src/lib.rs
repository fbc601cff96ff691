#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/finkpi/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod fmp;
pub mod raw;
pub mod statement;

pub use config::Config;
pub use error::{DataError, Result};
pub use fmp::FmpClient;
pub use raw::RawStore;
pub use statement::{StatementKind, StatementRecord, StatementTable};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
