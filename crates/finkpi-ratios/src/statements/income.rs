//! Income statement ratios.
//!
//! Margins are expressed against revenue. Tax rate and interest coverage are
//! expressed against pre-tax income and interest expense.

use super::StatementCleaner;
use crate::columns::{NET_INCOME, operand, put};
use crate::divide::safe_divide;
use crate::error::Result;
use finkpi_data::StatementKind;
use polars::prelude::*;

/// Income statement cleaner.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncomeCleaner;

impl StatementCleaner for IncomeCleaner {
    fn kind(&self) -> StatementKind {
        StatementKind::Income
    }

    fn derived_columns(&self) -> &'static [&'static str] {
        &[
            "grossMargin",
            "operatingMargin",
            "netProfitMargin",
            "ebitdaMargin",
            "rndIntensity",
            "sgnaIntensity",
            "interestExpenseRatio",
            "incomeBeforeTaxMargin",
            "effectiveTaxRate",
            "interestCoverage",
        ]
    }

    fn derive_ratios(&self, df: &mut DataFrame) -> Result<()> {
        let revenue = operand(df, "revenue")?;
        let gross_profit = operand(df, "grossProfit")?;
        let operating_expenses = operand(df, "operatingExpenses")?;
        let net_income = operand(df, NET_INCOME)?;
        // Not whitelisted, so this is always the zero operand after selection.
        let ebitda = operand(df, "ebitda")?;
        let rnd = operand(df, "researchAndDevelopmentExpenses")?;
        let sgna = operand(df, "sellingGeneralAndAdministrativeExpenses")?;
        let interest_expense = operand(df, "interestExpense")?;
        let pre_tax = operand(df, "incomeBeforeTax")?;
        let tax = operand(df, "incomeTaxExpense")?;

        let operating_income = &gross_profit - &operating_expenses;

        put(df, "grossMargin", safe_divide(&gross_profit, &revenue))?;
        put(df, "operatingMargin", safe_divide(&operating_income, &revenue))?;
        put(df, "netProfitMargin", safe_divide(&net_income, &revenue))?;
        put(df, "ebitdaMargin", safe_divide(&ebitda, &revenue))?;
        put(df, "rndIntensity", safe_divide(&rnd, &revenue))?;
        put(df, "sgnaIntensity", safe_divide(&sgna, &revenue))?;
        put(df, "interestExpenseRatio", safe_divide(&interest_expense, &revenue))?;
        put(df, "incomeBeforeTaxMargin", safe_divide(&pre_tax, &revenue))?;
        put(df, "effectiveTaxRate", safe_divide(&tax, &pre_tax))?;
        put(df, "interestCoverage", safe_divide(&pre_tax, &interest_expense))?;

        Ok(())
    }
}
