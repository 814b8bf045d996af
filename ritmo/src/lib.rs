//! ritmo
//!
//! High-level pipeline for descriptive statistics over per-symbol daily price
//! history. Register a [`HistoryProvider`], fetch a set of symbols over a
//! date range, and read statistics off the resulting [`AnalysisReport`]:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ritmo::{Ritmo, FetchRange};
//!
//! let ritmo = Ritmo::builder()
//!     .with_provider(Arc::new(connector))
//!     .build()?;
//! let report = ritmo.fetch(&["AAPL", "MSFT"], range).await?;
//! let vol = report.volatilities();
//! let sharpe = report.sharpe_ratios();
//! ```
//!
//! Every symbol is processed in isolation: one symbol's failure lands as that
//! symbol's `Err` entry in the report and never disturbs the others.
#![warn(missing_docs)]

/// Numeric chart series emitted for an external rendering surface.
pub mod charts;
mod pipeline;
mod report;

pub use pipeline::{Ritmo, RitmoBuilder};
pub use report::AnalysisReport;

pub use ritmo_core::{
    DEFAULT_MA_WINDOW, DEFAULT_PERIOD, Decomposition, FetchRange, HistoryProvider, PricePoint,
    PriceSeries, RawBar, RitmoError, SymbolFrame,
};
