//! Numeric chart series for an external rendering surface.
//!
//! The pipeline never draws: it emits labelled `(date, value)` sequences and
//! histogram bins, and leaves pixels to whatever frontend consumes them.

use chrono::NaiveDate;
use ritmo_core::{RitmoError, SymbolFrame};

/// Default number of price-histogram bins.
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;

/// A labelled line: dates paired index-wise with values.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    /// Legend label, e.g. "AAPL Cumulative Return".
    pub label: String,
    /// X axis.
    pub dates: Vec<NaiveDate>,
    /// Y axis, aligned with `dates`; `NaN` marks undefined positions.
    pub values: Vec<f64>,
}

/// A price histogram: `counts[i]` covers `[edges[i], edges[i + 1])`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Legend label, e.g. "AAPL Closing Price".
    pub label: String,
    /// Bin boundaries; one more edge than there are counts.
    pub edges: Vec<f64>,
    /// Observations per bin; sums to the series length.
    pub counts: Vec<usize>,
}

/// The close-price line for a frame.
#[must_use]
pub fn close_series(frame: &SymbolFrame) -> LineSeries {
    let series = frame.series();
    LineSeries {
        label: format!("{} Close", series.symbol()),
        dates: series.dates(),
        values: series.closes(),
    }
}

/// The cumulative-return line, starting at the second observation (the first
/// has no return).
#[must_use]
pub fn cumulative_return_series(frame: &SymbolFrame) -> LineSeries {
    let series = frame.series();
    LineSeries {
        label: format!("{} Cumulative Return", series.symbol()),
        dates: series.dates()[1..].to_vec(),
        values: frame.cumulative_returns().to_vec(),
    }
}

/// The moving-average overlay for `window`, looked up by window size.
///
/// # Errors
/// Returns `InvalidArg` if no moving average for `window` has been appended
/// to the frame; append one with [`SymbolFrame::with_moving_average`] first.
pub fn moving_average_series(frame: &SymbolFrame, window: usize) -> Result<LineSeries, RitmoError> {
    let ma = frame.moving_average(window).ok_or_else(|| {
        RitmoError::invalid_arg(format!(
            "no {window}-day moving average on this frame; append it first"
        ))
    })?;
    Ok(LineSeries {
        label: format!("{} {window}-Day MA", frame.series().symbol()),
        dates: frame.series().dates(),
        values: ma.to_vec(),
    })
}

/// Bin the closing prices of a frame into an equal-width histogram.
///
/// # Errors
/// Returns `InvalidArg` for zero bins.
pub fn price_histogram(frame: &SymbolFrame, bins: usize) -> Result<Histogram, RitmoError> {
    if bins == 0 {
        return Err(RitmoError::invalid_arg("histogram needs at least one bin"));
    }
    let closes = frame.series().closes();
    let min = closes.iter().copied().fold(f64::INFINITY, f64::min);
    let max = closes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // A constant series still gets a well-formed single-spike histogram.
    let span = if max > min { max - min } else { 1.0 };
    let width = span / bins as f64;

    let mut counts = vec![0usize; bins];
    for &c in &closes {
        let idx = (((c - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    let edges = (0..=bins).map(|i| min + width * i as f64).collect();

    Ok(Histogram {
        label: format!("{} Closing Price", frame.series().symbol()),
        edges,
        counts,
    })
}
