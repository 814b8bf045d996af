//! Scalar risk statistics over daily return series.
//!
//! Degenerate inputs follow IEEE semantics rather than erroring: the mean of
//! an empty slice, the standard deviation of fewer than two observations, and
//! the Sharpe ratio of a zero-variance series are all `NaN` (or infinity when
//! a non-zero mean is divided by a zero deviation).

/// Trading days per year, used to annualize the Sharpe ratio.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Arithmetic mean; `NaN` for an empty slice.
#[must_use]
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Sample standard deviation (ddof = 1); `NaN` for fewer than two observations.
#[must_use]
pub fn sample_stddev(xs: &[f64]) -> f64 {
    if xs.len() < 2 {
        return f64::NAN;
    }
    let m = mean(xs);
    let ss: f64 = xs.iter().map(|x| (x - m) * (x - m)).sum();
    (ss / (xs.len() - 1) as f64).sqrt()
}

/// Volatility of a daily return series: its sample standard deviation.
#[must_use]
pub fn volatility(returns: &[f64]) -> f64 {
    sample_stddev(returns)
}

/// Annualized Sharpe ratio over raw (non-excess) daily returns:
/// `mean(r) / stddev(r) * sqrt(252)`.
///
/// A zero-variance series divides by zero and yields the IEEE result
/// (`NaN` or ±infinity) instead of panicking.
#[must_use]
pub fn sharpe_ratio(returns: &[f64]) -> f64 {
    mean(returns) / sample_stddev(returns) * TRADING_DAYS_PER_YEAR.sqrt()
}

/// Per-observation drawdown of a cumulative return series:
/// `dd[i] = cum[i] - max(cum[0..=i])`, always <= 0.
///
/// The running peak starts at 0: a cumulative return series implicitly
/// begins at zero before the first daily return, so a series that only ever
/// loses ground draws down against that initial level.
#[must_use]
pub fn drawdowns(cumulative: &[f64]) -> Vec<f64> {
    let mut peak = 0.0f64;
    cumulative
        .iter()
        .map(|&c| {
            peak = peak.max(c);
            c - peak
        })
        .collect()
}

/// Maximum drawdown: the most negative drawdown, 0.0 for an empty series.
#[must_use]
pub fn max_drawdown(cumulative: &[f64]) -> f64 {
    drawdowns(cumulative).into_iter().fold(0.0, f64::min)
}
