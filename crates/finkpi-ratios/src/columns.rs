//! Column whitelists and lookup helpers.
//!
//! Whitelists are fixed per statement kind. Lookups never fail on an absent
//! column: operands fall back to a zero column and name lookups return
//! `None`.

use crate::error::Result;
use finkpi_data::StatementKind;
use polars::prelude::*;

/// Reporting date, the join key
pub const DATE: &str = "date";
/// Calendar year label
pub const CALENDAR_YEAR: &str = "calendarYear";
/// Period label (`FY`)
pub const PERIOD: &str = "period";
/// Link to the filed document
pub const FINAL_LINK: &str = "finalLink";
/// Net income, reported on both the income and cash flow statements
pub const NET_INCOME: &str = "netIncome";

/// Income statement columns kept by the cleaner.
pub const INCOME_COLUMNS: &[&str] = &[
    DATE,
    CALENDAR_YEAR,
    PERIOD,
    "revenue",
    "costOfRevenue",
    "grossProfit",
    "operatingExpenses",
    "researchAndDevelopmentExpenses",
    "sellingGeneralAndAdministrativeExpenses",
    "interestExpense",
    "incomeBeforeTax",
    "incomeTaxExpense",
    NET_INCOME,
    "eps",
    "weightedAverageShsOut",
    FINAL_LINK,
];

/// Balance sheet columns kept by the cleaner.
pub const BALANCE_SHEET_COLUMNS: &[&str] = &[
    DATE,
    CALENDAR_YEAR,
    PERIOD,
    "cashAndCashEquivalents",
    "shortTermInvestments",
    "totalCurrentAssets",
    "inventory",
    "netReceivables",
    "propertyPlantEquipmentNet",
    "goodwillAndIntangibleAssets",
    "totalAssets",
    "accountPayables",
    "shortTermDebt",
    "totalCurrentLiabilities",
    "longTermDebt",
    "totalNonCurrentLiabilities",
    "totalLiabilities",
    "commonStock",
    "retainedEarnings",
    "totalStockholdersEquity",
    "totalLiabilitiesAndStockholdersEquity",
    "totalDebt",
    "netDebt",
    FINAL_LINK,
];

/// Cash flow statement columns kept by the cleaner.
///
/// `netCashUsedForInvestingActivites` is spelled as the API spells it.
pub const CASH_FLOW_COLUMNS: &[&str] = &[
    DATE,
    CALENDAR_YEAR,
    PERIOD,
    NET_INCOME,
    "depreciationAndAmortization",
    "stockBasedCompensation",
    "changeInWorkingCapital",
    "netCashProvidedByOperatingActivities",
    "investmentsInPropertyPlantAndEquipment",
    "netCashUsedForInvestingActivites",
    "commonStockRepurchased",
    "dividendsPaid",
    "netCashUsedProvidedByFinancingActivities",
    "capitalExpenditure",
    "freeCashFlow",
    "cashAtBeginningOfPeriod",
    "cashAtEndOfPeriod",
    FINAL_LINK,
];

/// Whitelist for a statement kind.
pub const fn key_columns(kind: StatementKind) -> &'static [&'static str] {
    match kind {
        StatementKind::Income => INCOME_COLUMNS,
        StatementKind::BalanceSheet => BALANCE_SHEET_COLUMNS,
        StatementKind::CashFlow => CASH_FLOW_COLUMNS,
    }
}

/// True if `df` has a column called `name`.
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|n| n.as_str() == name)
}

/// Column names of `df`, in order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect()
}

/// First candidate that exists in `df`.
///
/// Candidates are tried in order, so earlier names take precedence.
pub fn resolve_column<'a>(df: &DataFrame, candidates: &[&'a str]) -> Option<&'a str> {
    candidates.iter().copied().find(|name| has_column(df, name))
}

/// Keep the whitelisted columns that are present, in whitelist order.
///
/// # Errors
///
/// Returns a polars error if the selection fails.
pub fn select_available(df: &DataFrame, whitelist: &[&str]) -> Result<DataFrame> {
    let available: Vec<&str> = whitelist
        .iter()
        .copied()
        .filter(|name| has_column(df, name))
        .collect();

    if available.is_empty() {
        return Ok(DataFrame::empty());
    }
    Ok(df.select(available)?)
}

/// Numeric operand: the column cast to `Float64`, or zeros if absent.
///
/// Values that cannot be read as numbers become null.
///
/// # Errors
///
/// Returns a polars error if the cast fails.
pub fn operand(df: &DataFrame, name: &str) -> Result<Float64Chunked> {
    if !has_column(df, name) {
        return Ok(Float64Chunked::full(name.into(), 0.0, df.height()));
    }
    let column = df.column(name)?.cast(&DataType::Float64)?;
    Ok(column.f64()?.clone())
}

/// Append or replace a derived column.
///
/// # Errors
///
/// Returns a polars error if the length does not match the frame.
pub fn put(df: &mut DataFrame, name: &str, values: Float64Chunked) -> Result<()> {
    let series = values.with_name(name.into()).into_series();
    df.with_column(Column::from(series))?;
    Ok(())
}

/// Parse `date` to a calendar date and sort most recent first.
///
/// Frames without a `date` column are returned unchanged. Unparseable dates
/// become null and sort last; ties keep their input order.
///
/// # Errors
///
/// Returns a polars error if the sort fails.
pub fn sort_by_date_desc(df: DataFrame) -> Result<DataFrame> {
    if !has_column(&df, DATE) {
        return Ok(df);
    }

    let sorted = df
        .lazy()
        .with_column(col(DATE).cast(DataType::Date))
        .sort(
            [DATE],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_nulls_last(true)
                .with_maintain_order(true),
        )
        .collect()?;

    Ok(sorted)
}
