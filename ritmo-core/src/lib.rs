//! ritmo-core
//!
//! Core types, the provider trait, and the numeric transforms shared across
//! the ritmo ecosystem.
//!
//! - `types`: common data structures (raw bars, cleaned price series, fetch ranges).
//! - `connector`: the `HistoryProvider` trait implemented by data-source crates.
//! - `series`: cleaning of raw provider bars into validated price series.
//! - `frame`: a cleaned series plus its derived columns (returns, moving averages).
//! - `stats`: the pure transforms (returns, rolling means, risk statistics,
//!   classical seasonal decomposition).
//!
//! Every statistic is a pure function of its input series; nothing in this
//! crate performs I/O. Undefined positions in derived series (the head of a
//! moving average, the edges of a decomposition trend) are represented as
//! `f64::NAN` so derived columns stay index-aligned with their source.
#![warn(missing_docs)]

/// The `HistoryProvider` trait implemented by data-source connectors.
pub mod connector;
mod error;
/// A cleaned price series together with its derived columns.
pub mod frame;
/// Cleaning of raw provider bars into validated price series.
pub mod series;
/// Pure numeric transforms over close-price and return series.
pub mod stats;
pub mod types;

pub use connector::HistoryProvider;
pub use error::RitmoError;
pub use frame::SymbolFrame;
pub use series::clean;
pub use stats::decompose::{DEFAULT_PERIOD, Decomposition, decompose};
pub use stats::returns::{cumulative_returns, daily_returns};
pub use stats::risk::{
    TRADING_DAYS_PER_YEAR, drawdowns, max_drawdown, mean, sample_stddev, sharpe_ratio, volatility,
};
pub use stats::rolling::{DEFAULT_MA_WINDOW, moving_average};
pub use types::*;
