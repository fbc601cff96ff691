//! Financial Modeling Prep statements API.
//!
//! # Example
//!
//! ```no_run
//! use finkpi_data::{Config, FmpClient, StatementKind};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = FmpClient::new(&config)?;
//!     let body = client.fetch_statement("AAPL", StatementKind::Income).await?;
//!     println!("{} annual periods", body.as_array().map_or(0, Vec::len));
//!     Ok(())
//! }
//! ```

pub mod client;

pub use client::FmpClient;
