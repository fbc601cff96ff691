//! The two pipeline stages.
//!
//! [`fetch_financials`] downloads and stores the raw statements.
//! [`calculate_kpis`] reads them back, cleans and merges them, and writes the
//! processed tables. Each stage aborts on the first error; files already
//! written by a failed run are left in place.

use crate::error::Result;
use finkpi_data::{Config, DataError, FmpClient, RawStore, StatementKind};
use finkpi_output::ProcessedStore;
use finkpi_ratios::{clean_statement, merge_financials};
use polars::prelude::DataFrame;
use std::path::PathBuf;
use tracing::info;

/// Name of the merged table.
pub const MERGED_TABLE: &str = "merged_financials";

/// Fetch the three annual statements for `symbol` and store them raw.
///
/// Statements are fetched in [`StatementKind::ALL`] order. Returns the
/// written paths in the same order.
///
/// # Errors
///
/// Fails on an empty symbol, a transport error, a non-success status or a
/// write failure. Statements fetched before the failure stay on disk.
pub async fn fetch_financials(config: &Config, symbol: &str) -> Result<Vec<PathBuf>> {
    let client = FmpClient::new(config)?;
    let store = RawStore::new(config.raw_dir());

    let mut paths = Vec::with_capacity(StatementKind::ALL.len());
    for kind in StatementKind::ALL {
        let body = client.fetch_statement(symbol, kind).await?;
        let path = store.save(symbol, kind, &body)?;
        println!(
            "Saved {} data for {} at {}",
            kind.endpoint(),
            symbol,
            path.display()
        );
        paths.push(path);
    }

    info!(symbol, "raw statements saved");
    Ok(paths)
}

/// Cleaned statements and the merged table for one symbol.
#[derive(Debug, Clone)]
pub struct KpiTables {
    /// Cleaned income statement
    pub income: DataFrame,
    /// Cleaned balance sheet
    pub balance: DataFrame,
    /// Cleaned cash flow statement
    pub cash_flow: DataFrame,
    /// Merged time series with ROA and ROE
    pub merged: DataFrame,
}

impl KpiTables {
    /// Tables paired with their output names, in write order.
    pub fn named(&self) -> [(&'static str, &DataFrame); 4] {
        [
            (StatementKind::Income.table_name(), &self.income),
            (StatementKind::BalanceSheet.table_name(), &self.balance),
            (StatementKind::CashFlow.table_name(), &self.cash_flow),
            (MERGED_TABLE, &self.merged),
        ]
    }
}

/// Clean the three raw statement frames and merge them.
///
/// # Errors
///
/// Returns an error if cleaning or merging fails.
pub fn transform(
    income: &DataFrame,
    balance: &DataFrame,
    cash_flow: &DataFrame,
) -> Result<KpiTables> {
    let income = clean_statement(StatementKind::Income, income)?;
    let balance = clean_statement(StatementKind::BalanceSheet, balance)?;
    let cash_flow = clean_statement(StatementKind::CashFlow, cash_flow)?;
    let merged = merge_financials(&income, &balance, &cash_flow)?;

    Ok(KpiTables {
        income,
        balance,
        cash_flow,
        merged,
    })
}

/// Load the stored raw statements for `symbol`, derive ratios and write the
/// four processed tables.
///
/// # Errors
///
/// Fails if a raw file is missing or malformed, or if a table cannot be
/// written.
pub fn calculate_kpis(config: &Config, symbol: &str) -> Result<KpiTables> {
    if symbol.trim().is_empty() {
        return Err(DataError::InvalidSymbol("Empty symbol".to_string()).into());
    }

    let raw = RawStore::new(config.raw_dir());
    let load = |kind: StatementKind| -> Result<DataFrame> {
        Ok(raw.load_table(symbol, kind)?.to_dataframe()?)
    };

    let tables = transform(
        &load(StatementKind::Income)?,
        &load(StatementKind::BalanceSheet)?,
        &load(StatementKind::CashFlow)?,
    )?;

    let store = ProcessedStore::new(config.processed_dir());
    let named = tables.named();
    let paths = store.save_all(symbol, &named)?;
    for ((name, _), path) in named.iter().zip(&paths) {
        println!("Saved {} to {}", name, path.display());
    }

    info!(
        symbol,
        periods = tables.merged.height(),
        columns = tables.merged.width(),
        "kpis calculated"
    );
    Ok(tables)
}
