use std::sync::Arc;

use chrono::NaiveDate;
use ritmo::{FetchRange, Ritmo, RitmoError};
use ritmo_mock::MockConnector;

fn full_range() -> FetchRange {
    FetchRange::new(
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    )
    .unwrap()
}

fn pipeline() -> Ritmo {
    Ritmo::builder()
        .with_provider(Arc::new(MockConnector::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn one_failing_symbol_never_disturbs_the_others() {
    let report = pipeline()
        .fetch(&["AAPL", "FAIL", "MSFT"], full_range())
        .await
        .unwrap();

    assert!(report.frame("AAPL").is_some());
    assert!(report.frame("MSFT").is_some());
    assert!(report.frame("FAIL").is_none());
    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "FAIL");
    assert!(matches!(failures[0].1, RitmoError::Fetch { .. }));

    // Scalar maps only carry the symbols that produced a frame.
    let vol = report.volatilities();
    assert_eq!(
        vol.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["AAPL", "MSFT"]
    );
}

#[tokio::test]
async fn all_symbols_failing_is_an_explicit_no_data_condition() {
    let err = pipeline()
        .fetch(&["FAIL", "EMPTY", "UNKNOWN"], full_range())
        .await
        .unwrap_err();
    assert!(matches!(err, RitmoError::NoData));
}

#[tokio::test]
async fn duplicate_and_empty_symbol_lists_are_rejected() {
    let ritmo = pipeline();
    assert!(matches!(
        ritmo.fetch(&["AAPL", "AAPL"], full_range()).await,
        Err(RitmoError::InvalidArg(_))
    ));
    assert!(matches!(
        ritmo.fetch(&[], full_range()).await,
        Err(RitmoError::InvalidArg(_))
    ));
}

#[tokio::test]
async fn frames_carry_returns_and_the_default_moving_average() {
    let report = pipeline().fetch(&["AAPL"], full_range()).await.unwrap();
    let frame = report.frame("AAPL").unwrap();

    let n = frame.series().len();
    assert!(n > 50);
    assert_eq!(frame.daily_returns().len(), n - 1);
    assert_eq!(frame.cumulative_returns().len(), n - 1);
    assert_eq!(frame.moving_average_windows(), vec![50]);
    let ma = frame.moving_average(50).unwrap();
    assert!(ma[48].is_nan());
    assert!(ma[49].is_finite());
}

#[tokio::test]
async fn a_flat_series_is_riskless() {
    let report = pipeline()
        .fetch(&["FLAT"], full_range())
        .await
        .unwrap();
    assert_eq!(report.volatilities()["FLAT"], 0.0);
    assert_eq!(report.max_drawdowns()["FLAT"], 0.0);
    // Zero variance: the Sharpe ratio is defined (NaN), not a panic.
    assert!(report.sharpe_ratios()["FLAT"].is_nan());
}

#[tokio::test]
async fn short_series_decomposition_fails_alone() {
    let report = pipeline()
        .fetch(&["AAPL", "LONG"], full_range())
        .await
        .unwrap();
    let decomps = report.decompositions();

    // AAPL has 120 rows, far below the 2 * 252 the period needs.
    assert!(matches!(
        decomps["AAPL"],
        Err(RitmoError::DataQuality(_))
    ));
    // LONG spans two trading years and decomposes fine.
    let long = decomps["LONG"].as_ref().unwrap();
    let n = report.frame("LONG").unwrap().series().len();
    assert_eq!(long.trend.len(), n);
    assert_eq!(long.seasonal.len(), n);
    assert_eq!(long.residual.len(), n);
}

#[tokio::test]
async fn non_default_windows_stay_addressable_by_window() {
    let mut report = pipeline()
        .fetch(&["AAPL", "MSFT"], full_range())
        .await
        .unwrap();
    report.with_moving_average(20).unwrap();

    for (_, frame) in report.frames() {
        assert_eq!(frame.moving_average_windows(), vec![20, 50]);
        assert!(frame.moving_average(20).is_some());
    }
}

#[tokio::test]
async fn builder_rejects_misconfiguration() {
    assert!(matches!(
        Ritmo::builder().build(),
        Err(RitmoError::InvalidArg(_))
    ));
    assert!(matches!(
        Ritmo::builder()
            .with_provider(Arc::new(MockConnector::new()))
            .ma_window(0)
            .build(),
        Err(RitmoError::InvalidArg(_))
    ));
    assert!(matches!(
        Ritmo::builder()
            .with_provider(Arc::new(MockConnector::new()))
            .decomposition_period(1)
            .build(),
        Err(RitmoError::InvalidArg(_))
    ));
}
