//! End-to-end run against the deterministic mock provider (CI-safe).
//!
//! ```bash
//! cargo run --example 01_analyze_mock
//! ```

use std::sync::Arc;

use chrono::NaiveDate;
use ritmo::charts::{cumulative_return_series, price_histogram};
use ritmo::{FetchRange, Ritmo, RitmoError};
use ritmo_mock::MockConnector;

#[tokio::main]
async fn main() -> Result<(), RitmoError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let ritmo = Ritmo::builder()
        .with_provider(Arc::new(MockConnector::new()))
        .build()?;

    let range = FetchRange::new(
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
    )?;
    let report = ritmo
        .fetch(&["AAPL", "MSFT", "LONG", "FAIL"], range)
        .await?;

    for (symbol, err) in report.failures() {
        println!("{symbol}: skipped ({err})");
    }
    let vol = report.volatilities();
    let sharpe = report.sharpe_ratios();
    let mdd = report.max_drawdowns();
    for (symbol, frame) in report.frames() {
        println!(
            "{symbol}: {} rows, vol {:.4}, sharpe {:.2}, max drawdown {:.2}%",
            frame.series().len(),
            vol[symbol],
            sharpe[symbol],
            100.0 * mdd[symbol],
        );

        let line = cumulative_return_series(frame);
        println!(
            "  {} ends at {:+.2}%",
            line.label,
            100.0 * line.values.last().copied().unwrap_or(0.0)
        );
        let hist = price_histogram(frame, 30)?;
        println!("  {}: {} bins", hist.label, hist.counts.len());
    }

    for (symbol, d) in report.decompositions() {
        match d {
            Ok(d) => println!("{symbol}: decomposed into {} aligned points", d.trend.len()),
            Err(e) => println!("{symbol}: decomposition skipped ({e})"),
        }
    }
    Ok(())
}
