//! Merging cleaned statements into one time series.
//!
//! Income and balance sheet are outer-joined on `date` with both sides of a
//! name collision suffixed. Cash flow is joined next; on a collision the left
//! column keeps its name and the cash flow column is suffixed, so no value is
//! silently discarded. Returns on assets and equity are computed on the
//! joined table, then redundant label and link columns are dropped.

use crate::columns::{
    CALENDAR_YEAR, DATE, FINAL_LINK, NET_INCOME, PERIOD, column_names, has_column, operand, put,
    resolve_column, sort_by_date_desc,
};
use crate::divide::safe_divide;
use crate::error::{RatioError, Result};
use finkpi_data::StatementKind;
use polars::prelude::*;
use tracing::debug;

/// Net income column candidates on the merged table, in order of preference.
///
/// The unsuffixed name survives when only one of income and balance sheet
/// reports net income; when both do, the first join suffixes it.
pub const NET_INCOME_CANDIDATES: &[&str] = &[NET_INCOME, "netIncome_income"];

/// Merge the three cleaned statements.
///
/// # Errors
///
/// Returns `RatioError::MissingColumn` if a non-empty table has no `date`
/// column, or a polars error if a join fails.
pub fn merge_financials(
    income: &DataFrame,
    balance: &DataFrame,
    cash_flow: &DataFrame,
) -> Result<DataFrame> {
    let mut left = keyed(income)?;
    let mut right = keyed(balance)?;
    suffix_collisions(
        &mut left,
        &mut right,
        Some(StatementKind::Income.suffix()),
        StatementKind::BalanceSheet.suffix(),
    )?;
    let mut joined = outer_join(left, right)?;

    let mut right = keyed(cash_flow)?;
    suffix_collisions(&mut joined, &mut right, None, StatementKind::CashFlow.suffix())?;
    let joined = outer_join(joined, right)?;

    let mut merged = sort_by_date_desc(joined)?;
    add_returns(&mut merged)?;

    let kept = order_columns(column_names(&merged));
    let merged = merged.select(kept)?;

    debug!(
        rows = merged.height(),
        columns = merged.width(),
        "statements merged"
    );
    Ok(merged)
}

/// Name of the net income column to use for returns, if any.
pub fn resolve_net_income(df: &DataFrame) -> Option<&'static str> {
    resolve_column(df, NET_INCOME_CANDIDATES)
}

/// True for columns dropped from the merged table.
///
/// Suffixed calendar year and period labels, every document link, and the
/// unsuffixed period label are redundant once the statements are joined.
pub fn is_redundant_column(name: &str) -> bool {
    name.starts_with("calendarYear_")
        || name.starts_with("period_")
        || name.starts_with(FINAL_LINK)
        || name == PERIOD
}

/// Drop redundant columns and move `calendarYear` to the front.
///
/// Other columns keep their relative order.
pub fn order_columns(names: Vec<String>) -> Vec<String> {
    let mut kept: Vec<String> = names
        .into_iter()
        .filter(|name| !is_redundant_column(name))
        .collect();

    if let Some(pos) = kept.iter().position(|name| name == CALENDAR_YEAR) {
        let year = kept.remove(pos);
        kept.insert(0, year);
    }
    kept
}

/// Return on assets and equity, appended as `roa` and `roe`.
fn add_returns(df: &mut DataFrame) -> Result<()> {
    let source = resolve_net_income(df).unwrap_or(NET_INCOME);
    let net_income = operand(df, source)?;
    let total_assets = operand(df, "totalAssets")?;
    let equity = operand(df, "totalStockholdersEquity")?;

    debug!(net_income = source, "computing returns");
    put(df, "roa", safe_divide(&net_income, &total_assets))?;
    put(df, "roe", safe_divide(&net_income, &equity))?;
    Ok(())
}

/// Copy of `df` with `date` typed as a calendar date.
///
/// An empty table without `date` (an API response with no periods) gets an
/// empty date column so it can still take part in the join.
fn keyed(df: &DataFrame) -> Result<DataFrame> {
    if !has_column(df, DATE) {
        if df.height() > 0 {
            return Err(RatioError::MissingColumn(DATE.to_string()));
        }
        let mut columns = vec![Column::from(Series::new_empty(DATE.into(), &DataType::Date))];
        columns.extend(df.get_columns().iter().cloned());
        return Ok(DataFrame::new(columns)?);
    }

    Ok(df
        .clone()
        .lazy()
        .with_column(col(DATE).cast(DataType::Date))
        .collect()?)
}

/// Rename columns present on both sides, except the join key.
fn suffix_collisions(
    left: &mut DataFrame,
    right: &mut DataFrame,
    left_suffix: Option<&str>,
    right_suffix: &str,
) -> Result<()> {
    let right_names = column_names(right);
    let shared: Vec<String> = column_names(left)
        .into_iter()
        .filter(|name| name != DATE && right_names.contains(name))
        .collect();

    for name in &shared {
        if let Some(suffix) = left_suffix {
            left.rename(name, format!("{name}{suffix}").into())?;
        }
        right.rename(name, format!("{name}{right_suffix}").into())?;
    }

    if !shared.is_empty() {
        debug!(?shared, "suffixed colliding columns");
    }
    Ok(())
}

fn outer_join(left: DataFrame, right: DataFrame) -> Result<DataFrame> {
    let joined = left
        .lazy()
        .join(
            right.lazy(),
            [col(DATE)],
            [col(DATE)],
            JoinArgs::new(JoinType::Full).with_coalesce(JoinCoalesce::CoalesceColumns),
        )
        .collect()?;
    Ok(joined)
}
