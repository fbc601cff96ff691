//! Statement cleaners.
//!
//! Each cleaner keeps its statement's whitelist, orders rows most recent
//! first and appends derived ratio columns. Missing inputs degrade to null
//! or zero-based ratios instead of failing, since field sets vary between
//! API vintages.

pub mod balance;
pub mod cash_flow;
pub mod income;

pub use balance::BalanceSheetCleaner;
pub use cash_flow::CashFlowCleaner;
pub use income::IncomeCleaner;

use crate::columns::{key_columns, select_available, sort_by_date_desc};
use crate::error::Result;
use finkpi_data::StatementKind;
use polars::prelude::*;
use tracing::{debug, warn};

/// Turns one raw statement table into a cleaned table.
pub trait StatementCleaner {
    /// Statement handled by this cleaner.
    fn kind(&self) -> StatementKind;

    /// Derived columns appended by [`derive_ratios`](Self::derive_ratios), in order.
    fn derived_columns(&self) -> &'static [&'static str];

    /// Append derived columns to an already selected and sorted frame.
    ///
    /// # Errors
    ///
    /// Returns a polars error if a column cannot be built.
    fn derive_ratios(&self, df: &mut DataFrame) -> Result<()>;

    /// Whitelisted source columns.
    fn key_columns(&self) -> &'static [&'static str] {
        key_columns(self.kind())
    }

    /// Select, sort and derive.
    ///
    /// # Errors
    ///
    /// Returns a polars error if selection, sorting or derivation fails.
    fn clean(&self, raw: &DataFrame) -> Result<DataFrame> {
        let selected = select_available(raw, self.key_columns())?;
        if selected.width() == 0 && raw.height() > 0 {
            warn!(
                statement = %self.kind(),
                rows = raw.height(),
                "no known columns present; rows dropped"
            );
        }
        let mut clean = sort_by_date_desc(selected)?;
        self.derive_ratios(&mut clean)?;

        debug!(
            statement = %self.kind(),
            rows = clean.height(),
            columns = clean.width(),
            "statement cleaned"
        );
        Ok(clean)
    }
}

/// Clean a raw statement frame with the cleaner for `kind`.
///
/// # Errors
///
/// See [`StatementCleaner::clean`].
pub fn clean_statement(kind: StatementKind, raw: &DataFrame) -> Result<DataFrame> {
    match kind {
        StatementKind::Income => IncomeCleaner.clean(raw),
        StatementKind::BalanceSheet => BalanceSheetCleaner.clean(raw),
        StatementKind::CashFlow => CashFlowCleaner.clean(raw),
    }
}
