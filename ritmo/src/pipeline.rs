use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use ritmo_core::{
    DEFAULT_MA_WINDOW, DEFAULT_PERIOD, FetchRange, HistoryProvider, RitmoError, SymbolFrame, clean,
};

use crate::report::AnalysisReport;

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub(crate) struct RitmoConfig {
    pub provider_timeout: Duration,
    pub ma_window: usize,
    pub decomposition_period: usize,
}

impl Default for RitmoConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(30),
            ma_window: DEFAULT_MA_WINDOW,
            decomposition_period: DEFAULT_PERIOD,
        }
    }
}

/// Orchestrator: fetches per-symbol history through the registered provider
/// and derives per-symbol frames and statistics.
pub struct Ritmo {
    provider: Arc<dyn HistoryProvider>,
    cfg: RitmoConfig,
}

/// Builder for constructing a [`Ritmo`] pipeline with custom configuration.
pub struct RitmoBuilder {
    provider: Option<Arc<dyn HistoryProvider>>,
    cfg: RitmoConfig,
}

impl Default for RitmoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RitmoBuilder {
    /// Create a new builder with defaults: 50-day moving average, period-252
    /// decomposition, 30s provider timeout, no provider registered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            provider: None,
            cfg: RitmoConfig::default(),
        }
    }

    /// Register the history provider. Required.
    #[must_use]
    pub fn with_provider(mut self, provider: Arc<dyn HistoryProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the per-symbol provider call timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set the moving-average window appended to every fetched frame.
    #[must_use]
    pub const fn ma_window(mut self, window: usize) -> Self {
        self.cfg.ma_window = window;
        self
    }

    /// Set the seasonal-decomposition period used by
    /// [`AnalysisReport::decompositions`].
    #[must_use]
    pub const fn decomposition_period(mut self, period: usize) -> Self {
        self.cfg.decomposition_period = period;
        self
    }

    /// Build the pipeline.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no provider was registered, the moving-average
    /// window is zero, or the decomposition period is below 2.
    pub fn build(self) -> Result<Ritmo, RitmoError> {
        let provider = self.provider.ok_or_else(|| {
            RitmoError::invalid_arg("no provider registered; add one via with_provider(...)")
        })?;
        if self.cfg.ma_window == 0 {
            return Err(RitmoError::invalid_arg("moving-average window must be >= 1"));
        }
        if self.cfg.decomposition_period < 2 {
            return Err(RitmoError::invalid_arg("decomposition period must be >= 2"));
        }
        Ok(Ritmo {
            provider,
            cfg: self.cfg,
        })
    }
}

impl Ritmo {
    /// Start building a new pipeline.
    #[must_use]
    pub fn builder() -> RitmoBuilder {
        RitmoBuilder::new()
    }

    /// Fetch and prepare frames for a batch of symbols.
    ///
    /// Symbols are fetched concurrently, each bounded by the configured
    /// provider timeout, then cleaned and annotated with the default
    /// moving-average column. Per-symbol failures become that symbol's `Err`
    /// entry in the report; they never affect other symbols.
    ///
    /// # Errors
    /// - `InvalidArg` for an empty or duplicate-bearing symbol list;
    /// - `NoData` when every requested symbol failed — an all-failed run is
    ///   an explicit condition, not an empty report.
    pub async fn fetch(
        &self,
        symbols: &[&str],
        range: FetchRange,
    ) -> Result<AnalysisReport, RitmoError> {
        if symbols.is_empty() {
            return Err(RitmoError::invalid_arg("no symbols specified for fetch"));
        }
        let mut seen = HashSet::new();
        for s in symbols {
            if !seen.insert(*s) {
                return Err(RitmoError::invalid_arg(format!(
                    "duplicate symbol '{s}' in fetch list"
                )));
            }
        }

        let tasks = symbols.iter().map(|&symbol| async move {
            let outcome = self.fetch_one(symbol, &range).await;
            (symbol.to_string(), outcome)
        });
        let joined = futures::future::join_all(tasks).await;

        let mut outcomes: BTreeMap<String, Result<SymbolFrame, RitmoError>> = BTreeMap::new();
        for (symbol, outcome) in joined {
            if let Err(e) = &outcome {
                tracing::warn!(symbol = %symbol, error = %e, "symbol failed; continuing");
            }
            outcomes.insert(symbol, outcome);
        }

        if outcomes.values().all(Result::is_err) {
            return Err(RitmoError::NoData);
        }
        Ok(AnalysisReport::new(outcomes, self.cfg.clone()))
    }

    async fn fetch_one(
        &self,
        symbol: &str,
        range: &FetchRange,
    ) -> Result<SymbolFrame, RitmoError> {
        tracing::info!(
            symbol = %symbol,
            provider = self.provider.name(),
            start = %range.start(),
            end = %range.end(),
            "fetching history"
        );
        let bars = tokio::time::timeout(
            self.cfg.provider_timeout,
            self.provider.daily_closes(symbol, range),
        )
        .await
        .unwrap_or_else(|_| {
            Err(RitmoError::fetch(
                symbol,
                format!("provider {} timed out", self.provider.name()),
            ))
        })?;

        let series = clean(symbol, bars)?;
        let mut frame = SymbolFrame::new(series);
        frame.with_moving_average(self.cfg.ma_window)?;
        tracing::info!(symbol = %symbol, rows = frame.series().len(), "frame ready");
        Ok(frame)
    }
}
