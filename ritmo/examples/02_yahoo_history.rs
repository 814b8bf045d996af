//! Fetch real history from Yahoo Finance and print the headline statistics.
//! Needs network access.
//!
//! ```bash
//! cargo run --example 02_yahoo_history
//! ```

use std::sync::Arc;

use chrono::NaiveDate;
use ritmo::{FetchRange, Ritmo, RitmoError};
use ritmo_yahoo::YahooConnector;

#[tokio::main]
async fn main() -> Result<(), RitmoError> {
    tracing_subscriber::fmt().init();

    let yahoo = YahooConnector::builder().build()?;
    let ritmo = Ritmo::builder()
        .with_provider(Arc::new(yahoo))
        .ma_window(50)
        .build()?;

    let range = FetchRange::new(
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
    )?;
    let report = ritmo.fetch(&["AAPL", "MSFT", "GOOG"], range).await?;

    let vol = report.volatilities();
    let sharpe = report.sharpe_ratios();
    let mdd = report.max_drawdowns();
    for (symbol, frame) in report.frames() {
        println!(
            "{symbol}: {} trading days | vol {:.4} | sharpe {:.2} | max drawdown {:.1}%",
            frame.series().len(),
            vol[symbol],
            sharpe[symbol],
            100.0 * mdd[symbol],
        );
    }
    for (symbol, err) in report.failures() {
        eprintln!("{symbol}: {err}");
    }
    Ok(())
}
