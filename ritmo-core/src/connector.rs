use async_trait::async_trait;

use crate::{FetchRange, RawBar, RitmoError};

/// Role trait for connectors that provide daily close history.
///
/// A provider that has no data for the requested range returns an empty
/// vector, not an error. Errors are reserved for unreachable providers,
/// malformed payloads, and unknown symbols.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// A stable identifier for logs and error messages (e.g. "ritmo-yahoo").
    fn name(&self) -> &'static str;

    /// Fetch daily bars for `symbol` over the inclusive `range`, oldest first.
    async fn daily_closes(
        &self,
        symbol: &str,
        range: &FetchRange,
    ) -> Result<Vec<RawBar>, RitmoError>;
}
