use crate::RitmoError;

/// Default moving-average window, in trading days.
pub const DEFAULT_MA_WINDOW: usize = 50;

/// Simple moving average over `window` observations.
///
/// The output is index-aligned with the input: `out[i]` is the mean of
/// `closes[i + 1 - window ..= i]`, and positions with fewer than `window`
/// observations behind them are `NaN`. A window of 1 reproduces the input
/// exactly.
///
/// # Errors
/// Returns `InvalidArg` for a zero window.
pub fn moving_average(closes: &[f64], window: usize) -> Result<Vec<f64>, RitmoError> {
    if window == 0 {
        return Err(RitmoError::invalid_arg("moving-average window must be >= 1"));
    }

    // Summed per position rather than via a running sum: daily series are
    // small and this keeps `window == 1` bit-exact with the input.
    let mut out = vec![f64::NAN; closes.len()];
    for i in 0..closes.len() {
        if i + 1 >= window {
            let start = i + 1 - window;
            out[i] = closes[start..=i].iter().sum::<f64>() / window as f64;
        }
    }
    Ok(out)
}
