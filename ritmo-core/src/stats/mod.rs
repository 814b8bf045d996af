//! Pure numeric transforms over close-price and return series.
//!
//! All functions here are stateless: given the same input slice they produce
//! the same output, and none of them mutates its input.

/// Classical multiplicative seasonal decomposition.
pub mod decompose;
/// Daily and cumulative percentage returns.
pub mod returns;
/// Scalar risk statistics: volatility, Sharpe ratio, drawdowns.
pub mod risk;
/// Rolling (moving-average) transforms.
pub mod rolling;
