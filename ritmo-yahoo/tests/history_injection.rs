use chrono::NaiveDate;
use httpmock::prelude::*;
use ritmo_core::{FetchRange, HistoryProvider, RitmoError};
use ritmo_yahoo::YahooConnector;

fn range() -> FetchRange {
    FetchRange::new(
        NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
        NaiveDate::from_ymd_opt(2023, 1, 4).unwrap(),
    )
    .unwrap()
}

fn connector(server: &MockServer) -> YahooConnector {
    YahooConnector::builder()
        .base_url(server.base_url())
        .build()
        .unwrap()
}

// 2023-01-02 / 03 / 04 at 00:00 UTC.
const TS: [i64; 3] = [1672617600, 1672704000, 1672790400];

#[tokio::test]
async fn parses_daily_bars_and_passes_null_closes_through() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v8/finance/chart/AAPL")
                .query_param("interval", "1d");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({
                    "chart": {
                        "result": [{
                            "timestamp": TS,
                            "indicators": { "quote": [{ "close": [125.07, null, 126.36] }] }
                        }],
                        "error": null
                    }
                }));
        })
        .await;

    let bars = connector(&server)
        .daily_closes("AAPL", &range())
        .await
        .unwrap();
    mock.assert_async().await;

    assert_eq!(bars.len(), 3);
    assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
    assert_eq!(bars[0].close, Some(125.07));
    assert_eq!(bars[1].close, None);
    assert_eq!(bars[2].close, Some(126.36));
}

#[tokio::test]
async fn requests_an_exclusive_period2_one_day_past_the_range() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v8/finance/chart/MSFT")
                .query_param("period1", "1672617600")
                // end 2023-01-04 inclusive -> period2 at 2023-01-05 00:00 UTC
                .query_param("period2", "1672876800");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({
                    "chart": {
                        "result": [{
                            "timestamp": [],
                            "indicators": { "quote": [{ "close": [] }] }
                        }],
                        "error": null
                    }
                }));
        })
        .await;

    let bars = connector(&server)
        .daily_closes("MSFT", &range())
        .await
        .unwrap();
    mock.assert_async().await;
    assert!(bars.is_empty());
}

#[tokio::test]
async fn envelope_error_normalizes_to_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v8/finance/chart/NOPE");
            then.status(404)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({
                    "chart": {
                        "result": null,
                        "error": { "code": "Not Found", "description": "No data found" }
                    }
                }));
        })
        .await;

    let err = connector(&server)
        .daily_closes("NOPE", &range())
        .await
        .unwrap_err();
    assert!(matches!(err, RitmoError::NotFound { .. }));
}

#[tokio::test]
async fn mismatched_columns_are_a_fetch_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v8/finance/chart/BAD");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({
                    "chart": {
                        "result": [{
                            "timestamp": TS,
                            "indicators": { "quote": [{ "close": [1.0] }] }
                        }],
                        "error": null
                    }
                }));
        })
        .await;

    let err = connector(&server)
        .daily_closes("BAD", &range())
        .await
        .unwrap_err();
    assert!(matches!(err, RitmoError::Fetch { .. }));
}

#[tokio::test]
async fn unparseable_error_body_reports_the_http_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v8/finance/chart/DOWN");
            then.status(500).body("upstream exploded");
        })
        .await;

    let err = connector(&server)
        .daily_closes("DOWN", &range())
        .await
        .unwrap_err();
    match err {
        RitmoError::Fetch { symbol, msg } => {
            assert_eq!(symbol, "DOWN");
            assert!(msg.contains("500"), "unexpected message: {msg}");
        }
        other => panic!("expected Fetch, got {other:?}"),
    }
}
