#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/finkpi/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod columns;
pub mod divide;
pub mod error;
pub mod merge;
pub mod registry;
pub mod statements;

pub use divide::{safe_div, safe_divide};
pub use error::{RatioError, Result};
pub use merge::{merge_financials, resolve_net_income};
pub use registry::{
    RatioCategory, RatioInfo, available_ratios, get_ratio_info, ratios_by_category,
    ratios_for_statement,
};
pub use statements::{
    BalanceSheetCleaner, CashFlowCleaner, IncomeCleaner, StatementCleaner, clean_statement,
};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
