//! Wire types for the Yahoo Finance v8 chart endpoint.

use chrono::DateTime;
use ritmo_core::{RawBar, RitmoError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct ChartEnvelope {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuoteBlock {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

impl ChartEnvelope {
    /// Normalize the envelope into raw bars, or the error it carries.
    ///
    /// Yahoo reports unknown symbols inside the envelope rather than via the
    /// HTTP status, so both paths are handled here. An empty `timestamp`
    /// array is a legitimate empty range, not an error.
    pub fn into_bars(self, symbol: &str) -> Result<Vec<RawBar>, RitmoError> {
        if let Some(err) = self.chart.error {
            if err.code.eq_ignore_ascii_case("not found") {
                return Err(RitmoError::not_found(format!("history for {symbol}")));
            }
            return Err(RitmoError::fetch(
                symbol,
                format!("{}: {}", err.code, err.description),
            ));
        }

        let Some(result) = self.chart.result.and_then(|mut r| {
            if r.is_empty() { None } else { Some(r.remove(0)) }
        }) else {
            return Err(RitmoError::not_found(format!("history for {symbol}")));
        };

        let closes = result
            .indicators
            .quote
            .into_iter()
            .next()
            .map(|q| q.close)
            .unwrap_or_default();
        if !result.timestamp.is_empty() && closes.len() != result.timestamp.len() {
            return Err(RitmoError::fetch(
                symbol,
                format!(
                    "malformed chart payload: {} timestamps vs {} closes",
                    result.timestamp.len(),
                    closes.len()
                ),
            ));
        }

        result
            .timestamp
            .into_iter()
            .zip(closes)
            .map(|(ts, close)| {
                let date = DateTime::from_timestamp(ts, 0)
                    .ok_or_else(|| {
                        RitmoError::fetch(symbol, format!("timestamp {ts} out of range"))
                    })?
                    .date_naive();
                Ok(RawBar { date, close })
            })
            .collect()
    }
}
