use std::collections::BTreeMap;

use ritmo_core::{Decomposition, RitmoError, SymbolFrame};

use crate::pipeline::RitmoConfig;

/// Per-symbol outcome of a pipeline fetch.
///
/// Failures are first-class: each symbol maps to a `Result`, so callers can
/// inspect why a symbol is missing without re-deriving it from logs. Scalar
/// statistic maps contain only the symbols whose frame was built.
#[derive(Debug)]
pub struct AnalysisReport {
    outcomes: BTreeMap<String, Result<SymbolFrame, RitmoError>>,
    cfg: RitmoConfig,
}

impl AnalysisReport {
    pub(crate) fn new(
        outcomes: BTreeMap<String, Result<SymbolFrame, RitmoError>>,
        cfg: RitmoConfig,
    ) -> Self {
        Self { outcomes, cfg }
    }

    /// All per-symbol outcomes, keyed by symbol.
    #[must_use]
    pub fn outcomes(&self) -> &BTreeMap<String, Result<SymbolFrame, RitmoError>> {
        &self.outcomes
    }

    /// The frame for one symbol, if it was built.
    #[must_use]
    pub fn frame(&self, symbol: &str) -> Option<&SymbolFrame> {
        self.outcomes.get(symbol).and_then(|r| r.as_ref().ok())
    }

    /// Iterate over successfully built frames.
    pub fn frames(&self) -> impl Iterator<Item = (&str, &SymbolFrame)> {
        self.outcomes
            .iter()
            .filter_map(|(s, r)| r.as_ref().ok().map(|f| (s.as_str(), f)))
    }

    /// Iterate over per-symbol failures.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &RitmoError)> {
        self.outcomes
            .iter()
            .filter_map(|(s, r)| r.as_ref().err().map(|e| (s.as_str(), e)))
    }

    /// Volatility (sample standard deviation of daily returns) per symbol.
    #[must_use]
    pub fn volatilities(&self) -> BTreeMap<String, f64> {
        self.scalar(SymbolFrame::volatility)
    }

    /// Annualized Sharpe ratio per symbol.
    #[must_use]
    pub fn sharpe_ratios(&self) -> BTreeMap<String, f64> {
        self.scalar(SymbolFrame::sharpe_ratio)
    }

    /// Maximum drawdown per symbol, always <= 0.
    #[must_use]
    pub fn max_drawdowns(&self) -> BTreeMap<String, f64> {
        self.scalar(SymbolFrame::max_drawdown)
    }

    /// Seasonal decomposition per symbol at the configured period.
    ///
    /// Decomposition has preconditions (length, positivity) that individual
    /// symbols may miss, so each entry is its own `Result`; one symbol's
    /// `DataQuality` failure leaves the others intact.
    #[must_use]
    pub fn decompositions(&self) -> BTreeMap<String, Result<Decomposition, RitmoError>> {
        self.frames()
            .map(|(s, f)| (s.to_string(), f.decompose(self.cfg.decomposition_period)))
            .collect()
    }

    /// Append a moving-average column for `window` to every frame.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a zero window; valid windows cannot fail.
    pub fn with_moving_average(&mut self, window: usize) -> Result<(), RitmoError> {
        for outcome in self.outcomes.values_mut() {
            if let Ok(frame) = outcome {
                frame.with_moving_average(window)?;
            }
        }
        Ok(())
    }

    fn scalar(&self, stat: impl Fn(&SymbolFrame) -> f64) -> BTreeMap<String, f64> {
        self.frames()
            .map(|(s, f)| (s.to_string(), stat(f)))
            .collect()
    }
}
