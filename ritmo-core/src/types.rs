//! Common data structures shared by connectors and the analytics pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::RitmoError;

/// A daily bar as delivered by a provider, before any cleaning.
///
/// A missing or unusable close is `None`; cleaning decides whether it gets
/// forward-filled or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawBar {
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Closing price, if the provider reported one.
    pub close: Option<f64>,
}

/// A single cleaned observation: one trading day, one finite close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Closing price; always finite after cleaning.
    pub close: f64,
}

/// An inclusive calendar date range for a history fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl FetchRange {
    /// Build a validated range.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RitmoError> {
        if start > end {
            return Err(RitmoError::invalid_arg(format!(
                "fetch range start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// First date of the range (inclusive).
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last date of the range (inclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }
}

/// A per-symbol, date-ascending, duplicate-free sequence of cleaned closes.
///
/// Constructed by [`crate::series::clean`] or the validating [`PriceSeries::new`];
/// statistic functions read it but never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    symbol: String,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from already-clean points, checking the invariants.
    ///
    /// # Errors
    /// Returns `DataQuality` if dates are not strictly ascending or any close
    /// is non-finite.
    pub fn new(symbol: impl Into<String>, points: Vec<PricePoint>) -> Result<Self, RitmoError> {
        let symbol = symbol.into();
        for pair in points.windows(2) {
            if pair[0].date >= pair[1].date {
                return Err(RitmoError::data_quality(format!(
                    "{symbol}: dates not strictly ascending at {}",
                    pair[1].date
                )));
            }
        }
        if let Some(p) = points.iter().find(|p| !p.close.is_finite()) {
            return Err(RitmoError::data_quality(format!(
                "{symbol}: non-finite close at {}",
                p.date
            )));
        }
        Ok(Self { symbol, points })
    }

    /// Symbol this series belongs to.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The cleaned observations, date-ascending.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// The close column as a contiguous vector.
    #[must_use]
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// The date column as a contiguous vector.
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
