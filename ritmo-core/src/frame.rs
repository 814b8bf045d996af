use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::stats::{decompose, returns, risk, rolling};
use crate::{PriceSeries, RitmoError};

/// A cleaned price series plus its derived columns.
///
/// The series itself is immutable once the frame is built; derived columns
/// (returns, moving averages) are appended alongside it. Moving averages are
/// keyed by their window size, so a non-default window is addressable exactly
/// like the default one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolFrame {
    series: PriceSeries,
    daily_returns: Vec<f64>,
    cumulative_returns: Vec<f64>,
    moving_averages: BTreeMap<usize, Vec<f64>>,
}

impl SymbolFrame {
    /// Build a frame from a cleaned series, deriving both return columns.
    #[must_use]
    pub fn new(series: PriceSeries) -> Self {
        let closes = series.closes();
        Self {
            daily_returns: returns::daily_returns(&closes),
            cumulative_returns: returns::cumulative_returns(&closes),
            series,
            moving_averages: BTreeMap::new(),
        }
    }

    /// The underlying cleaned series.
    #[must_use]
    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    /// Daily percentage returns, one element shorter than the series.
    #[must_use]
    pub fn daily_returns(&self) -> &[f64] {
        &self.daily_returns
    }

    /// Cumulative compounded returns, aligned with [`Self::daily_returns`].
    #[must_use]
    pub fn cumulative_returns(&self) -> &[f64] {
        &self.cumulative_returns
    }

    /// Compute and append a moving-average column for `window`, returning it.
    ///
    /// Recomputing an existing window is a no-op lookup.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a zero window.
    pub fn with_moving_average(&mut self, window: usize) -> Result<&[f64], RitmoError> {
        if !self.moving_averages.contains_key(&window) {
            let ma = rolling::moving_average(&self.series.closes(), window)?;
            self.moving_averages.insert(window, ma);
        }
        Ok(self.moving_averages[&window].as_slice())
    }

    /// Look up a previously appended moving-average column by window size.
    #[must_use]
    pub fn moving_average(&self, window: usize) -> Option<&[f64]> {
        self.moving_averages.get(&window).map(Vec::as_slice)
    }

    /// Windows of all appended moving-average columns, ascending.
    #[must_use]
    pub fn moving_average_windows(&self) -> Vec<usize> {
        self.moving_averages.keys().copied().collect()
    }

    /// Volatility: sample standard deviation of the daily returns.
    #[must_use]
    pub fn volatility(&self) -> f64 {
        risk::volatility(&self.daily_returns)
    }

    /// Annualized Sharpe ratio over the daily returns.
    #[must_use]
    pub fn sharpe_ratio(&self) -> f64 {
        risk::sharpe_ratio(&self.daily_returns)
    }

    /// Maximum drawdown of the cumulative return series, always <= 0.
    #[must_use]
    pub fn max_drawdown(&self) -> f64 {
        risk::max_drawdown(&self.cumulative_returns)
    }

    /// Seasonally decompose the close column with a multiplicative model.
    ///
    /// # Errors
    /// Propagates the preconditions of [`decompose::decompose`]: at least two
    /// full periods of data and strictly positive closes.
    pub fn decompose(&self, period: usize) -> Result<decompose::Decomposition, RitmoError> {
        decompose::decompose(&self.series.closes(), period)
    }
}
