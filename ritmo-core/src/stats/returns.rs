/// Daily percentage returns: `r[i] = close[i+1] / close[i] - 1`.
///
/// The result has one element fewer than the input; the return for the first
/// observation is undefined and therefore absent. Inputs shorter than two
/// elements yield an empty vector.
#[must_use]
pub fn daily_returns(closes: &[f64]) -> Vec<f64> {
    closes.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

/// Cumulative compounded returns: `cum[i] = Π(1 + r[0..=i]) - 1`.
///
/// Aligned with [`daily_returns`] (length `n - 1`). By the telescoping
/// product, the last element equals `close[last] / close[0] - 1`.
#[must_use]
pub fn cumulative_returns(closes: &[f64]) -> Vec<f64> {
    let mut acc = 1.0;
    daily_returns(closes)
        .into_iter()
        .map(|r| {
            acc *= 1.0 + r;
            acc - 1.0
        })
        .collect()
}
