use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{PricePoint, PriceSeries, RawBar, RitmoError};

/// Clean raw provider bars into a validated [`PriceSeries`].
///
/// Policy, in order:
/// - bars are keyed by date; the first bar for a duplicate date wins;
/// - non-finite closes are treated as missing;
/// - missing closes are forward-filled from the prior valid close;
/// - rows still missing a close (a leading gap) are dropped.
///
/// Cleaning an already-clean series reproduces it exactly.
///
/// # Errors
/// Returns `DataQuality` if nothing survives cleaning — either the provider
/// returned no bars at all or every bar lacked a usable close.
pub fn clean(symbol: &str, bars: Vec<RawBar>) -> Result<PriceSeries, RitmoError> {
    let total = bars.len();

    let mut by_date: BTreeMap<NaiveDate, Option<f64>> = BTreeMap::new();
    for bar in bars {
        let close = bar.close.filter(|c| c.is_finite());
        by_date.entry(bar.date).or_insert(close);
    }

    let mut points = Vec::with_capacity(by_date.len());
    let mut last_close: Option<f64> = None;
    let mut dropped = 0usize;
    for (date, close) in by_date {
        match close.or(last_close) {
            Some(c) => {
                last_close = Some(c);
                points.push(PricePoint { date, close: c });
            }
            // Leading gap: no prior observation to fill from.
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::debug!(symbol = %symbol, dropped, total, "dropped rows with no fillable close");
    }
    if points.is_empty() {
        return Err(RitmoError::data_quality(format!(
            "{symbol}: no usable closes after cleaning ({total} raw bars)"
        )));
    }

    PriceSeries::new(symbol, points)
}
