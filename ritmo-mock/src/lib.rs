//! Mock history provider for CI-safe tests and examples.
//!
//! Serves deterministic fixture series and recognizes a few magic symbols:
//! `FAIL` forces a fetch error, `EMPTY` returns an empty range, and anything
//! unknown maps to a not-found error.

use async_trait::async_trait;
use ritmo_core::{FetchRange, HistoryProvider, RawBar, RitmoError};

mod fixtures;

/// Deterministic mock connector.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Create the mock connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn maybe_fail(symbol: &str) -> Result<(), RitmoError> {
        if symbol == "FAIL" {
            return Err(RitmoError::fetch(symbol, "forced failure: history"));
        }
        Ok(())
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    fn name(&self) -> &'static str {
        "ritmo-mock"
    }

    async fn daily_closes(
        &self,
        symbol: &str,
        range: &FetchRange,
    ) -> Result<Vec<RawBar>, RitmoError> {
        Self::maybe_fail(symbol)?;
        if symbol == "EMPTY" {
            return Ok(vec![]);
        }
        let bars = fixtures::by_symbol(symbol)
            .ok_or_else(|| RitmoError::not_found(format!("history for {symbol}")))?;
        Ok(bars
            .into_iter()
            .filter(|b| b.date >= range.start() && b.date <= range.end())
            .collect())
    }
}
