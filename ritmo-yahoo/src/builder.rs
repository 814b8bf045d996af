use std::time::Duration;

use ritmo_core::RitmoError;

use crate::YahooConnector;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builder for [`YahooConnector`].
///
/// The base URL is overridable so tests can point the connector at a local
/// mock server instead of Yahoo.
pub struct YahooBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for YahooBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl YahooBuilder {
    /// Start from the production endpoint and a 10s request timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the API base URL (no trailing slash).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the per-request HTTP timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `Fetch`-style configuration failure as `InvalidArg` if the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<YahooConnector, RitmoError> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| RitmoError::invalid_arg(format!("http client: {e}")))?;
        Ok(YahooConnector {
            http,
            base_url: self.base_url,
        })
    }
}
