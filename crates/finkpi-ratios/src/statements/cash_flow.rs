//! Cash flow quality ratios.
//!
//! Capex, dividends and buybacks are reported as outflows (negative), so
//! they enter the ratios as absolute values.

use super::StatementCleaner;
use crate::columns::{NET_INCOME, operand, put};
use crate::divide::safe_divide;
use crate::error::Result;
use finkpi_data::StatementKind;
use polars::prelude::*;

/// Cash flow statement cleaner.
#[derive(Debug, Clone, Copy, Default)]
pub struct CashFlowCleaner;

impl StatementCleaner for CashFlowCleaner {
    fn kind(&self) -> StatementKind {
        StatementKind::CashFlow
    }

    fn derived_columns(&self) -> &'static [&'static str] {
        &[
            "fcfToNetIncome",
            "capexToOperatingCash",
            "dividendCoverage",
            "repurchaseToFreeCashFlow",
            "fcfConversion",
        ]
    }

    fn derive_ratios(&self, df: &mut DataFrame) -> Result<()> {
        let free_cash_flow = operand(df, "freeCashFlow")?;
        let net_income = operand(df, NET_INCOME)?;
        let operating_cash = operand(df, "netCashProvidedByOperatingActivities")?;
        let capex = absolute(operand(df, "capitalExpenditure")?);
        let dividends = absolute(operand(df, "dividendsPaid")?);
        let buybacks = absolute(operand(df, "commonStockRepurchased")?);

        put(df, "fcfToNetIncome", safe_divide(&free_cash_flow, &net_income))?;
        put(df, "capexToOperatingCash", safe_divide(&capex, &operating_cash))?;
        put(df, "dividendCoverage", safe_divide(&operating_cash, &dividends))?;
        put(df, "repurchaseToFreeCashFlow", safe_divide(&buybacks, &free_cash_flow))?;
        // Same quantity as fcfToNetIncome, kept under its own name.
        put(df, "fcfConversion", safe_divide(&free_cash_flow, &net_income))?;

        Ok(())
    }
}

fn absolute(values: Float64Chunked) -> Float64Chunked {
    values.apply_values(f64::abs)
}
