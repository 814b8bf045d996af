use chrono::{Datelike, NaiveDate};
use ritmo_core::RawBar;

pub fn by_symbol(s: &str) -> Option<Vec<RawBar>> {
    match s {
        // Gently trending large-cap with a mid-series reporting gap.
        "AAPL" => Some(with_gap(trending(120, 140.0, 0.35), 40, 3)),
        // Steeper trend, no gaps.
        "MSFT" => Some(trending(120, 240.0, 0.80)),
        // Constant closes: zero volatility, zero drawdown.
        "FLAT" => Some(trending(120, 100.0, 0.0)),
        // Long seasonal series: two-plus trading years, strictly positive.
        "LONG" => Some(seasonal(540, 80.0)),
        _ => None,
    }
}

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 2).unwrap()
}

/// Consecutive weekdays starting 2023-01-02.
fn trading_days(n: usize) -> Vec<NaiveDate> {
    let mut out = Vec::with_capacity(n);
    let mut d = anchor();
    while out.len() < n {
        if d.weekday().num_days_from_monday() < 5 {
            out.push(d);
        }
        d = d.succ_opt().expect("date within range");
    }
    out
}

fn trending(n: usize, base: f64, step: f64) -> Vec<RawBar> {
    trading_days(n)
        .into_iter()
        .enumerate()
        .map(|(i, date)| RawBar {
            date,
            close: Some(base + step * i as f64),
        })
        .collect()
}

/// A positive series with a yearly multiplicative wave, suitable for
/// decomposition at period 252.
fn seasonal(n: usize, base: f64) -> Vec<RawBar> {
    trading_days(n)
        .into_iter()
        .enumerate()
        .map(|(i, date)| {
            let trend = base + 0.05 * i as f64;
            let wave = 1.0 + 0.08 * (i as f64 * std::f64::consts::TAU / 252.0).sin();
            RawBar {
                date,
                close: Some(trend * wave),
            }
        })
        .collect()
}

/// Blank out `len` closes starting at `at`, leaving the dates in place.
fn with_gap(mut bars: Vec<RawBar>, at: usize, len: usize) -> Vec<RawBar> {
    for bar in bars.iter_mut().skip(at).take(len) {
        bar.close = None;
    }
    bars
}
