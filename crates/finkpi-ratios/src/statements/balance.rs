//! Balance sheet ratios: liquidity and leverage.

use super::StatementCleaner;
use crate::columns::{operand, put};
use crate::divide::safe_divide;
use crate::error::Result;
use finkpi_data::StatementKind;
use polars::prelude::*;

/// Balance sheet cleaner.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceSheetCleaner;

impl StatementCleaner for BalanceSheetCleaner {
    fn kind(&self) -> StatementKind {
        StatementKind::BalanceSheet
    }

    fn derived_columns(&self) -> &'static [&'static str] {
        &[
            "currentRatio",
            "cashRatio",
            "debtToEquity",
            "netDebtToAssets",
            "workingCapital",
            "inventoryRatio",
        ]
    }

    fn derive_ratios(&self, df: &mut DataFrame) -> Result<()> {
        let current_assets = operand(df, "totalCurrentAssets")?;
        let current_liabilities = operand(df, "totalCurrentLiabilities")?;
        let cash = operand(df, "cashAndCashEquivalents")?;
        let short_term_investments = operand(df, "shortTermInvestments")?;
        let total_debt = operand(df, "totalDebt")?;
        let equity = operand(df, "totalStockholdersEquity")?;
        let net_debt = operand(df, "netDebt")?;
        let total_assets = operand(df, "totalAssets")?;
        let inventory = operand(df, "inventory")?;

        let liquid = &cash + &short_term_investments;
        // A difference, not a ratio: a zero liability leaves it defined.
        let working_capital = &current_assets - &current_liabilities;

        put(df, "currentRatio", safe_divide(&current_assets, &current_liabilities))?;
        put(df, "cashRatio", safe_divide(&liquid, &current_liabilities))?;
        put(df, "debtToEquity", safe_divide(&total_debt, &equity))?;
        put(df, "netDebtToAssets", safe_divide(&net_debt, &total_assets))?;
        put(df, "workingCapital", working_capital)?;
        put(df, "inventoryRatio", safe_divide(&inventory, &total_assets))?;

        Ok(())
    }
}
