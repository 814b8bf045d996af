//! ritmo-yahoo
//!
//! Yahoo Finance connector for the ritmo analytics workspace. Implements
//! [`HistoryProvider`] against the v8 chart endpoint, serving daily bars
//! with `{date, close}` and passing missing closes through as `None` for the
//! core cleaning step to resolve.
#![warn(missing_docs)]

use async_trait::async_trait;
use chrono::NaiveDate;
use ritmo_core::{FetchRange, HistoryProvider, RawBar, RitmoError};

mod builder;
mod chart;

pub use builder::YahooBuilder;

/// Yahoo Finance daily-history connector.
pub struct YahooConnector {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
}

impl YahooConnector {
    /// Start building a connector.
    #[must_use]
    pub fn builder() -> YahooBuilder {
        YahooBuilder::new()
    }

    fn midnight_utc(date: NaiveDate) -> i64 {
        date.and_hms_opt(0, 0, 0)
            .expect("midnight is always valid")
            .and_utc()
            .timestamp()
    }
}

#[async_trait]
impl HistoryProvider for YahooConnector {
    fn name(&self) -> &'static str {
        "ritmo-yahoo"
    }

    async fn daily_closes(
        &self,
        symbol: &str,
        range: &FetchRange,
    ) -> Result<Vec<RawBar>, RitmoError> {
        // Yahoo treats period2 as exclusive; push it one day past the
        // inclusive range end.
        let period1 = Self::midnight_utc(range.start());
        let period2 = Self::midnight_utc(
            range
                .end()
                .succ_opt()
                .ok_or_else(|| RitmoError::invalid_arg("range end out of calendar range"))?,
        );

        let url = format!("{}/v8/finance/chart/{symbol}", self.base_url);
        tracing::debug!(symbol = %symbol, %url, period1, period2, "requesting daily history");

        let resp = self
            .http
            .get(&url)
            .query(&[
                ("period1", period1.to_string()),
                ("period2", period2.to_string()),
                ("interval", "1d".to_string()),
            ])
            .send()
            .await
            .map_err(|e| RitmoError::fetch(symbol, e.to_string()))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RitmoError::not_found(format!("history for {symbol}")));
        }

        // Yahoo embeds errors in the envelope even on non-2xx responses;
        // try to decode before falling back to the bare status.
        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| RitmoError::fetch(symbol, e.to_string()))?;
        let envelope: chart::ChartEnvelope = serde_json::from_slice(&body).map_err(|e| {
            if status.is_success() {
                RitmoError::fetch(symbol, format!("malformed chart payload: {e}"))
            } else {
                RitmoError::fetch(symbol, format!("http status {status}"))
            }
        })?;

        envelope.into_bars(symbol)
    }
}
