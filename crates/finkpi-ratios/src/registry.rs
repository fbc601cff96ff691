//! Ratio Registry
//!
//! Central catalogue of every derived column: what it measures, where it is
//! computed and which source columns it reads.

use finkpi_data::StatementKind;

/// Ratio categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatioCategory {
    /// Margins and expense intensities
    Profitability,
    /// Short-term solvency (current ratio, cash ratio, working capital)
    Liquidity,
    /// Debt load and interest burden
    Leverage,
    /// How well earnings convert to cash, and where the cash goes
    CashFlowQuality,
    /// Returns on the balance sheet (ROA, ROE)
    Returns,
}

impl RatioCategory {
    /// Every category, in listing order.
    pub const ALL: [Self; 5] = [
        Self::Profitability,
        Self::Liquidity,
        Self::Leverage,
        Self::CashFlowQuality,
        Self::Returns,
    ];

    /// Display name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Profitability => "Profitability",
            Self::Liquidity => "Liquidity",
            Self::Leverage => "Leverage",
            Self::CashFlowQuality => "Cash Flow Quality",
            Self::Returns => "Returns",
        }
    }
}

/// Ratio metadata
#[derive(Debug, Clone)]
pub struct RatioInfo {
    /// Output column name (unique identifier)
    pub name: &'static str,
    /// Ratio category
    pub category: RatioCategory,
    /// Statement whose cleaner computes it; `None` for the merged table
    pub statement: Option<StatementKind>,
    /// Brief description
    pub description: &'static str,
    /// Source columns read, numerators first
    pub operands: &'static [&'static str],
}

/// Get all ratio info, in output column order
pub fn available_ratios() -> Vec<RatioInfo> {
    use RatioCategory::*;
    use StatementKind::*;

    vec![
        // Income statement
        RatioInfo {
            name: "grossMargin",
            category: Profitability,
            statement: Some(Income),
            description: "Gross profit over revenue",
            operands: &["grossProfit", "revenue"],
        },
        RatioInfo {
            name: "operatingMargin",
            category: Profitability,
            statement: Some(Income),
            description: "Gross profit less operating expenses, over revenue",
            operands: &["grossProfit", "operatingExpenses", "revenue"],
        },
        RatioInfo {
            name: "netProfitMargin",
            category: Profitability,
            statement: Some(Income),
            description: "Net income over revenue",
            operands: &["netIncome", "revenue"],
        },
        RatioInfo {
            name: "ebitdaMargin",
            category: Profitability,
            statement: Some(Income),
            description: "EBITDA over revenue",
            operands: &["ebitda", "revenue"],
        },
        RatioInfo {
            name: "rndIntensity",
            category: Profitability,
            statement: Some(Income),
            description: "R&D expenses over revenue",
            operands: &["researchAndDevelopmentExpenses", "revenue"],
        },
        RatioInfo {
            name: "sgnaIntensity",
            category: Profitability,
            statement: Some(Income),
            description: "SG&A expenses over revenue",
            operands: &["sellingGeneralAndAdministrativeExpenses", "revenue"],
        },
        RatioInfo {
            name: "interestExpenseRatio",
            category: Leverage,
            statement: Some(Income),
            description: "Interest expense over revenue",
            operands: &["interestExpense", "revenue"],
        },
        RatioInfo {
            name: "incomeBeforeTaxMargin",
            category: Profitability,
            statement: Some(Income),
            description: "Pre-tax income over revenue",
            operands: &["incomeBeforeTax", "revenue"],
        },
        RatioInfo {
            name: "effectiveTaxRate",
            category: Profitability,
            statement: Some(Income),
            description: "Income tax expense over pre-tax income",
            operands: &["incomeTaxExpense", "incomeBeforeTax"],
        },
        RatioInfo {
            name: "interestCoverage",
            category: Leverage,
            statement: Some(Income),
            description: "Pre-tax income over interest expense",
            operands: &["incomeBeforeTax", "interestExpense"],
        },
        // Balance sheet
        RatioInfo {
            name: "currentRatio",
            category: Liquidity,
            statement: Some(BalanceSheet),
            description: "Current assets over current liabilities",
            operands: &["totalCurrentAssets", "totalCurrentLiabilities"],
        },
        RatioInfo {
            name: "cashRatio",
            category: Liquidity,
            statement: Some(BalanceSheet),
            description: "Cash and short-term investments over current liabilities",
            operands: &[
                "cashAndCashEquivalents",
                "shortTermInvestments",
                "totalCurrentLiabilities",
            ],
        },
        RatioInfo {
            name: "debtToEquity",
            category: Leverage,
            statement: Some(BalanceSheet),
            description: "Total debt over stockholders' equity",
            operands: &["totalDebt", "totalStockholdersEquity"],
        },
        RatioInfo {
            name: "netDebtToAssets",
            category: Leverage,
            statement: Some(BalanceSheet),
            description: "Net debt over total assets",
            operands: &["netDebt", "totalAssets"],
        },
        RatioInfo {
            name: "workingCapital",
            category: Liquidity,
            statement: Some(BalanceSheet),
            description: "Current assets minus current liabilities (an amount, not a ratio)",
            operands: &["totalCurrentAssets", "totalCurrentLiabilities"],
        },
        RatioInfo {
            name: "inventoryRatio",
            category: Liquidity,
            statement: Some(BalanceSheet),
            description: "Inventory over total assets",
            operands: &["inventory", "totalAssets"],
        },
        // Cash flow
        RatioInfo {
            name: "fcfToNetIncome",
            category: CashFlowQuality,
            statement: Some(CashFlow),
            description: "Free cash flow over net income",
            operands: &["freeCashFlow", "netIncome"],
        },
        RatioInfo {
            name: "capexToOperatingCash",
            category: CashFlowQuality,
            statement: Some(CashFlow),
            description: "Absolute capital expenditure over operating cash flow",
            operands: &["capitalExpenditure", "netCashProvidedByOperatingActivities"],
        },
        RatioInfo {
            name: "dividendCoverage",
            category: CashFlowQuality,
            statement: Some(CashFlow),
            description: "Operating cash flow over absolute dividends paid",
            operands: &["netCashProvidedByOperatingActivities", "dividendsPaid"],
        },
        RatioInfo {
            name: "repurchaseToFreeCashFlow",
            category: CashFlowQuality,
            statement: Some(CashFlow),
            description: "Absolute share repurchases over free cash flow",
            operands: &["commonStockRepurchased", "freeCashFlow"],
        },
        RatioInfo {
            name: "fcfConversion",
            category: CashFlowQuality,
            statement: Some(CashFlow),
            description: "Free cash flow over net income (same as fcfToNetIncome)",
            operands: &["freeCashFlow", "netIncome"],
        },
        // Merged table
        RatioInfo {
            name: "roa",
            category: Returns,
            statement: None,
            description: "Return on assets - net income over total assets",
            operands: &["netIncome", "totalAssets"],
        },
        RatioInfo {
            name: "roe",
            category: Returns,
            statement: None,
            description: "Return on equity - net income over stockholders' equity",
            operands: &["netIncome", "totalStockholdersEquity"],
        },
    ]
}

/// Get ratios by category
pub fn ratios_by_category(category: RatioCategory) -> Vec<RatioInfo> {
    available_ratios()
        .into_iter()
        .filter(|r| r.category == category)
        .collect()
}

/// Get ratios computed by one statement's cleaner
pub fn ratios_for_statement(kind: StatementKind) -> Vec<RatioInfo> {
    available_ratios()
        .into_iter()
        .filter(|r| r.statement == Some(kind))
        .collect()
}

/// Get ratio info by name
pub fn get_ratio_info(name: &str) -> Option<RatioInfo> {
    available_ratios().into_iter().find(|r| r.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statements::{
        BalanceSheetCleaner, CashFlowCleaner, IncomeCleaner, StatementCleaner,
    };
    use std::collections::HashSet;

    #[test]
    fn test_names_unique() {
        let ratios = available_ratios();
        let names: HashSet<_> = ratios.iter().map(|r| r.name).collect();
        assert_eq!(names.len(), ratios.len());
    }

    #[test]
    fn test_registry_matches_cleaners() {
        let cleaners: [&dyn StatementCleaner; 3] =
            [&IncomeCleaner, &BalanceSheetCleaner, &CashFlowCleaner];

        for cleaner in cleaners {
            let registered: Vec<_> = ratios_for_statement(cleaner.kind())
                .into_iter()
                .map(|r| r.name)
                .collect();
            assert_eq!(registered, cleaner.derived_columns());
        }
    }

    #[test]
    fn test_lookup() {
        let roa = get_ratio_info("roa").unwrap();
        assert_eq!(roa.category, RatioCategory::Returns);
        assert!(roa.statement.is_none());
        assert!(get_ratio_info("peRatio").is_none());
    }

    #[test]
    fn test_by_category() {
        let returns = ratios_by_category(RatioCategory::Returns);
        assert_eq!(returns.len(), 2);

        let liquidity: Vec<_> = ratios_by_category(RatioCategory::Liquidity)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert!(liquidity.contains(&"currentRatio"));
        assert!(liquidity.contains(&"workingCapital"));
    }

    #[test]
    fn test_categories_cover_registry() {
        let listed: usize = RatioCategory::ALL
            .iter()
            .map(|c| ratios_by_category(*c).len())
            .sum();
        assert_eq!(listed, available_ratios().len());
        assert_eq!(RatioCategory::CashFlowQuality.name(), "Cash Flow Quality");
    }
}
