//! Statements API client.

use crate::config::Config;
use crate::error::{DataError, Result};
use crate::statement::StatementKind;
use serde_json::Value;
use tracing::{debug, warn};

/// User agent sent with every request
const USER_AGENT: &str = concat!("finkpi/", env!("CARGO_PKG_VERSION"));

/// Period query value; only annual statements are requested
const ANNUAL: &str = "annual";

/// Financial Modeling Prep client.
///
/// One GET per statement, awaited one at a time. No retry, no rate limiting
/// and no pagination: the API returns the full annual history in one page.
pub struct FmpClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl FmpClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Network` if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(DataError::Network)?;

        if config.api_key.is_none() {
            warn!("FMP_API_KEY is not set; requests will be unauthenticated");
        }

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the annual history of one statement.
    ///
    /// Returns the parsed response body unmodified.
    ///
    /// # Errors
    ///
    /// Returns `DataError::InvalidSymbol` for an empty symbol,
    /// `DataError::Http` on a non-success status, `DataError::Network` on
    /// transport failure or an undecodable body.
    ///
    /// # Example
    /// ```no_run
    /// use finkpi_data::{Config, FmpClient, StatementKind};
    ///
    /// # async fn example() -> finkpi_data::Result<()> {
    /// let client = FmpClient::new(&Config::default().with_api_key("demo"))?;
    /// let body = client.fetch_statement("AAPL", StatementKind::CashFlow).await?;
    /// assert!(body.is_array());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_statement(&self, symbol: &str, kind: StatementKind) -> Result<Value> {
        if symbol.trim().is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        let url = format!("{}/{}/{}", self.base_url, kind.endpoint(), symbol);
        let mut query = vec![("period", ANNUAL)];
        if let Some(key) = self.api_key.as_deref() {
            query.push(("apikey", key));
        }

        debug!(%url, statement = %kind, "requesting statement");
        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(DataError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Http {
                endpoint: kind.endpoint().to_string(),
                symbol: symbol.to_string(),
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await.map_err(DataError::Network)?;
        if !body.is_array() {
            warn!(statement = %kind, symbol, "response body is not a JSON array");
        }

        Ok(body)
    }
}

impl std::fmt::Debug for FmpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FmpClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}
