//! Derive ratios from stored raw statements and write the processed tables.

mod cli;

use clap::Parser;
use cli::{BoxError, init_tracing};
use finkpi::ratios::{RatioCategory, get_ratio_info, ratios_by_category};
use finkpi::{Config, calculate_kpis};
use std::process;

#[derive(Debug, Parser)]
#[command(version, about = "Derive financial ratios from stored statements")]
struct Args {
    /// Ticker symbol
    #[arg(default_value = "AAPL")]
    symbol: String,

    /// List every derived column by category
    #[arg(long)]
    list_ratios: bool,

    /// Describe one derived column
    #[arg(long, value_name = "NAME", conflicts_with = "list_ratios")]
    describe: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), BoxError> {
    let args = Args::parse();
    init_tracing()?;

    if args.list_ratios {
        print!("{}", ratio_listing());
        return Ok(());
    }
    if let Some(name) = &args.describe {
        print!("{}", describe_ratio(name)?);
        return Ok(());
    }

    let config = Config::from_env()?;
    calculate_kpis(&config, &args.symbol)?;
    Ok(())
}

fn ratio_listing() -> String {
    let mut out = String::new();
    for category in RatioCategory::ALL {
        out.push_str(&format!("{}:\n", category.name()));
        for ratio in ratios_by_category(category) {
            out.push_str(&format!("  {:<26}{}\n", ratio.name, ratio.description));
        }
    }
    out
}

fn describe_ratio(name: &str) -> Result<String, BoxError> {
    let ratio = get_ratio_info(name).ok_or_else(|| format!("Unknown ratio: {}", name))?;
    let table = ratio
        .statement
        .map_or("merged_financials", |kind| kind.table_name());

    Ok(format!(
        "{}\n  {}\n  Category: {}\n  Table:    {}\n  Reads:    {}\n",
        ratio.name,
        ratio.description,
        ratio.category.name(),
        table,
        ratio.operands.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_flags() {
        let args = Args::try_parse_from(["calculate-kpis", "--list-ratios"]).unwrap();
        assert!(args.list_ratios);
        assert_eq!(args.symbol, "AAPL");

        let args = Args::try_parse_from(["calculate-kpis", "MSFT"]).unwrap();
        assert_eq!(args.symbol, "MSFT");
        assert!(!args.list_ratios);

        let args = Args::try_parse_from(["calculate-kpis", "--describe", "roe"]).unwrap();
        assert_eq!(args.describe.as_deref(), Some("roe"));

        assert!(
            Args::try_parse_from(["calculate-kpis", "--list-ratios", "--describe", "roe"])
                .is_err()
        );
    }

    #[test]
    fn test_ratio_listing() {
        let listing = ratio_listing();
        assert!(listing.starts_with("Profitability:\n  grossMargin"));
        assert!(listing.contains("Cash Flow Quality:\n  fcfToNetIncome"));
        assert!(listing.contains("  roa"));
    }

    #[test]
    fn test_describe_ratio() {
        let text = describe_ratio("currentRatio").unwrap();
        assert!(text.contains("Category: Liquidity"));
        assert!(text.contains("Table:    balance_clean"));
        assert!(text.contains("Reads:    totalCurrentAssets, totalCurrentLiabilities"));

        assert!(describe_ratio("roe").unwrap().contains("Table:    merged_financials"));
        assert!(describe_ratio("peRatio").is_err());
    }
}
