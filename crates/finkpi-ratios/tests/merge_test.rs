//! Integration tests for cleaning and merging statement tables.

use approx::assert_relative_eq;
use finkpi_data::{StatementKind, StatementTable};
use finkpi_ratios::columns::column_names;
use finkpi_ratios::{
    IncomeCleaner, StatementCleaner, clean_statement, merge_financials, ratios_for_statement,
    resolve_net_income,
};
use polars::prelude::*;
use rstest::rstest;
use serde_json::{Value, json};

fn raw(kind: StatementKind, value: Value) -> DataFrame {
    StatementTable::from_json(kind, value)
        .unwrap()
        .to_dataframe()
        .unwrap()
}

fn cleaned(kind: StatementKind, value: Value) -> DataFrame {
    clean_statement(kind, &raw(kind, value)).unwrap()
}

fn dates(df: &DataFrame) -> Vec<Option<String>> {
    let column = df.column("date").unwrap().cast(&DataType::String).unwrap();
    column
        .str()
        .unwrap()
        .into_iter()
        .map(|d| d.map(str::to_string))
        .collect()
}

fn value(df: &DataFrame, name: &str, row: usize) -> Option<f64> {
    df.column(name).unwrap().f64().unwrap().get(row)
}

#[test]
fn test_cleaned_columns_are_whitelist_intersection() {
    let df = cleaned(
        StatementKind::Income,
        json!([{
            "date": "2023-12-31",
            "symbol": "AAPL",
            "reportedCurrency": "USD",
            "revenue": 1000.0,
            "grossProfit": 400.0,
            "ebitda": 250.0,
            "eps": 6.1,
        }]),
    );

    let names = column_names(&df);
    let (source, derived) = names.split_at(4);
    assert_eq!(source, ["date", "revenue", "grossProfit", "eps"]);
    assert_eq!(derived, IncomeCleaner.derived_columns());
}

#[rstest]
#[case(StatementKind::Income)]
#[case(StatementKind::BalanceSheet)]
#[case(StatementKind::CashFlow)]
fn test_unrelated_input_never_fails(#[case] kind: StatementKind) {
    let df = cleaned(kind, json!([{"date": "2023-12-31", "unrelated": 1.0}]));

    let names = column_names(&df);
    assert_eq!(df.height(), 1);
    assert_eq!(names[0], "date");
    assert_eq!(names.len(), 1 + ratios_for_statement(kind).len());
    assert!(!names.iter().any(|n| n == "unrelated"));
}

#[test]
fn test_gross_and_operating_margins() {
    let df = cleaned(
        StatementKind::Income,
        json!([{
            "date": "2023-12-31",
            "revenue": 1000,
            "grossProfit": 400,
            "operatingExpenses": 100,
        }]),
    );

    assert_relative_eq!(value(&df, "grossMargin", 0).unwrap(), 0.4);
    assert_relative_eq!(value(&df, "operatingMargin", 0).unwrap(), 0.3);
}

#[test]
fn test_cleaned_rows_most_recent_first() {
    let df = cleaned(
        StatementKind::BalanceSheet,
        json!([
            {"date": "2021-12-31", "totalAssets": 1.0},
            {"date": "2023-12-31", "totalAssets": 3.0},
            {"date": "2022-12-31", "totalAssets": 2.0},
        ]),
    );

    assert_eq!(
        dates(&df),
        vec![
            Some("2023-12-31".to_string()),
            Some("2022-12-31".to_string()),
            Some("2021-12-31".to_string()),
        ]
    );
    assert_eq!(value(&df, "totalAssets", 0), Some(3.0));
}

#[test]
fn test_merge_is_union_of_dates() {
    let income = cleaned(
        StatementKind::Income,
        json!([
            {"date": "2022-12-31", "revenue": 900.0, "netIncome": 90.0},
            {"date": "2023-12-31", "revenue": 1000.0, "netIncome": 100.0},
        ]),
    );
    let balance = cleaned(
        StatementKind::BalanceSheet,
        json!([
            {"date": "2023-12-31", "totalAssets": 2000.0, "totalStockholdersEquity": 500.0},
            {"date": "2024-12-31", "totalAssets": 2200.0, "totalStockholdersEquity": 550.0},
        ]),
    );
    let cash_flow = cleaned(StatementKind::CashFlow, json!([]));

    let merged = merge_financials(&income, &balance, &cash_flow).unwrap();

    assert_eq!(merged.height(), 3);
    assert_eq!(
        dates(&merged),
        vec![
            Some("2024-12-31".to_string()),
            Some("2023-12-31".to_string()),
            Some("2022-12-31".to_string()),
        ]
    );

    // 2024: balance only
    assert_eq!(value(&merged, "revenue", 0), None);
    assert_eq!(value(&merged, "totalAssets", 0), Some(2200.0));
    // 2022: income only
    assert_eq!(value(&merged, "revenue", 2), Some(900.0));
    assert_eq!(value(&merged, "totalAssets", 2), None);

    assert_relative_eq!(value(&merged, "roa", 1).unwrap(), 0.05);
    assert_relative_eq!(value(&merged, "roe", 1).unwrap(), 0.2);
    assert_eq!(value(&merged, "roa", 0), None);
    assert_eq!(value(&merged, "roa", 2), None);
}

#[test]
fn test_roa_falls_back_to_income_net_income() {
    // Both sides of the first join report net income, so neither keeps the
    // plain name.
    let income = cleaned(
        StatementKind::Income,
        json!([{"date": "2023-12-31", "netIncome": 100.0}]),
    );
    let mut balance = cleaned(
        StatementKind::BalanceSheet,
        json!([{"date": "2023-12-31", "totalAssets": 1000.0, "totalStockholdersEquity": 400.0}]),
    );
    balance
        .with_column(Series::new("netIncome".into(), [7.0]))
        .unwrap();
    let cash_flow = cleaned(
        StatementKind::CashFlow,
        json!([{"date": "2023-12-31", "freeCashFlow": 80.0}]),
    );

    let merged = merge_financials(&income, &balance, &cash_flow).unwrap();
    let names = column_names(&merged);

    assert!(!names.contains(&"netIncome".to_string()));
    assert!(names.contains(&"netIncome_income".to_string()));
    assert!(names.contains(&"netIncome_balance".to_string()));
    assert_eq!(resolve_net_income(&merged), Some("netIncome_income"));
    assert_relative_eq!(value(&merged, "roa", 0).unwrap(), 0.1);
    assert_relative_eq!(value(&merged, "roe", 0).unwrap(), 0.25);
}

#[test]
fn test_cash_flow_collisions_are_suffixed() {
    let income = cleaned(
        StatementKind::Income,
        json!([{"date": "2023-12-31", "calendarYear": "2023", "period": "FY", "netIncome": 100.0}]),
    );
    let balance = cleaned(
        StatementKind::BalanceSheet,
        json!([{"date": "2023-12-31", "calendarYear": "2023", "period": "FY", "totalAssets": 1000.0}]),
    );
    let cash_flow = cleaned(
        StatementKind::CashFlow,
        json!([{
            "date": "2023-12-31",
            "calendarYear": "2023",
            "period": "FY",
            "netIncome": 99.0,
            "finalLink": "https://example.com/10-k",
        }]),
    );

    let merged = merge_financials(&income, &balance, &cash_flow).unwrap();
    let names = column_names(&merged);

    assert_eq!(names[0], "calendarYear");
    assert_eq!(value(&merged, "netIncome", 0), Some(100.0));
    assert_eq!(value(&merged, "netIncome_cashflow", 0), Some(99.0));
    assert_relative_eq!(value(&merged, "roa", 0).unwrap(), 0.1);

    for name in &names {
        assert!(!name.starts_with("calendarYear_"), "{name} kept");
        assert!(!name.starts_with("period"), "{name} kept");
        assert!(!name.starts_with("finalLink"), "{name} kept");
    }
}

#[test]
fn test_zero_total_assets_gives_null_roa() {
    let income = cleaned(
        StatementKind::Income,
        json!([{"date": "2023-12-31", "netIncome": 100.0}]),
    );
    let balance = cleaned(
        StatementKind::BalanceSheet,
        json!([{"date": "2023-12-31", "totalAssets": 0.0, "totalStockholdersEquity": 0.0}]),
    );
    let cash_flow = cleaned(StatementKind::CashFlow, json!([]));

    let merged = merge_financials(&income, &balance, &cash_flow).unwrap();

    assert_eq!(value(&merged, "roa", 0), None);
    assert_eq!(value(&merged, "roe", 0), None);
}

#[test]
fn test_merge_all_empty() {
    let empty = |kind| cleaned(kind, json!([]));
    let merged = merge_financials(
        &empty(StatementKind::Income),
        &empty(StatementKind::BalanceSheet),
        &empty(StatementKind::CashFlow),
    )
    .unwrap();

    assert_eq!(merged.height(), 0);
    let names = column_names(&merged);
    assert!(names.contains(&"roa".to_string()));
    assert!(names.contains(&"roe".to_string()));
}
