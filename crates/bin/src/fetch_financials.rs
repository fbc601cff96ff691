//! Fetch annual statements for one symbol and store the raw JSON.

mod cli;

use clap::Parser;
use cli::{BoxError, init_tracing};
use finkpi::{Config, fetch_financials};
use std::process;

#[derive(Debug, Parser)]
#[command(version, about = "Fetch annual financial statements")]
struct Args {
    /// Ticker symbol
    #[arg(default_value = "AAPL")]
    symbol: String,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), BoxError> {
    let args = Args::parse();
    init_tracing()?;

    let config = Config::from_env()?;
    fetch_financials(&config, &args.symbol).await?;
    Ok(())
}
