use serde::{Deserialize, Serialize};

use crate::RitmoError;

/// Default decomposition period: one trading year.
pub const DEFAULT_PERIOD: usize = 252;

/// Result of a multiplicative seasonal decomposition.
///
/// All three components are index-aligned with the input closes, so
/// `observed[i] ≈ trend[i] * seasonal[i] * residual[i]` wherever the trend is
/// defined. The first and last `period / 2` trend (and residual) values are
/// `NaN`: a centred moving average has no complete window there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decomposition {
    /// Long-run level, extracted with a centred moving average.
    pub trend: Vec<f64>,
    /// Periodic component, normalized so its indices average to 1.
    pub seasonal: Vec<f64>,
    /// What remains: `observed / (trend * seasonal)`.
    pub residual: Vec<f64>,
}

/// Decompose a close-price series into trend, seasonal, and residual
/// components with a multiplicative model.
///
/// This is the classical decomposition: the trend is a centred moving average
/// over one period (for even periods, a `period + 1` window with half weight
/// on the endpoints), the seasonal component is the per-phase average of the
/// detrended series normalized to mean 1, and the residual is the observed
/// series divided by both.
///
/// # Errors
/// - `InvalidArg` for a period below 2;
/// - `DataQuality` if the series is shorter than two full periods, or if any
///   observation is non-positive (a multiplicative model is undefined there).
pub fn decompose(closes: &[f64], period: usize) -> Result<Decomposition, RitmoError> {
    if period < 2 {
        return Err(RitmoError::invalid_arg(
            "decomposition period must be >= 2",
        ));
    }
    let n = closes.len();
    if n < 2 * period {
        return Err(RitmoError::data_quality(format!(
            "decomposition needs at least {} observations, got {n}",
            2 * period
        )));
    }
    if closes.iter().any(|&c| c <= 0.0) {
        return Err(RitmoError::data_quality(
            "multiplicative decomposition requires strictly positive values",
        ));
    }

    let trend = centred_moving_average(closes, period);

    // Per-phase mean of the detrended series, over positions with a defined trend.
    let mut sums = vec![0.0; period];
    let mut counts = vec![0usize; period];
    for i in 0..n {
        if trend[i].is_finite() {
            sums[i % period] += closes[i] / trend[i];
            counts[i % period] += 1;
        }
    }
    let mut indices: Vec<f64> = sums
        .iter()
        .zip(&counts)
        .map(|(s, &c)| if c > 0 { s / c as f64 } else { f64::NAN })
        .collect();

    // Normalize so the seasonal indices average to 1.
    let idx_mean = indices.iter().sum::<f64>() / period as f64;
    for idx in &mut indices {
        *idx /= idx_mean;
    }

    let seasonal: Vec<f64> = (0..n).map(|i| indices[i % period]).collect();
    let residual: Vec<f64> = (0..n)
        .map(|i| closes[i] / (trend[i] * seasonal[i]))
        .collect();

    Ok(Decomposition {
        trend,
        seasonal,
        residual,
    })
}

/// Centred moving average over one period, `NaN` where the window is
/// incomplete.
///
/// For odd periods this is a plain mean over `period` observations centred on
/// `i`. For even periods the window spans `period + 1` observations with the
/// two endpoints weighted by one half, which keeps the average centred.
fn centred_moving_average(xs: &[f64], period: usize) -> Vec<f64> {
    let n = xs.len();
    let half = period / 2;
    let mut out = vec![f64::NAN; n];

    if period % 2 == 0 {
        for i in half..n.saturating_sub(half) {
            let mut sum = 0.5 * (xs[i - half] + xs[i + half]);
            for x in &xs[i - half + 1..i + half] {
                sum += x;
            }
            out[i] = sum / period as f64;
        }
    } else {
        for i in half..n.saturating_sub(half) {
            out[i] = xs[i - half..=i + half].iter().sum::<f64>() / period as f64;
        }
    }
    out
}
