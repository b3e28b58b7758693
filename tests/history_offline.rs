mod common;

use httpmock::Method::GET;
use nsewatch::{HistoryBuilder, Interval, Range, WatchError};

#[tokio::test]
async fn daily_history_parses_candles() {
    let server = common::setup_server();
    let sym = "RELIANCE.NS";

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v8/finance/chart/{sym}"))
            .query_param("range", "1mo")
            .query_param("interval", "1d")
            .query_param("includePrePost", "false");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::chart_body(
                &[1_704_067_200, 1_704_153_600, 1_704_240_000],
                &[2900.0, 2910.5, 2895.25],
                &[1_000_000, 1_100_000, 900_000],
            ));
    });

    let client = common::client_for(&server);
    let bars = HistoryBuilder::new(&client, sym)
        .range(Range::M1)
        .interval(Interval::D1)
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(bars.len(), 3);
    assert_eq!(bars[0].ts, 1_704_067_200);
    assert!((bars[1].close - 2910.5).abs() < 1e-9);
    assert_eq!(bars[2].volume, Some(900_000));
}

#[tokio::test]
async fn intraday_request_uses_five_minute_interval() {
    let server = common::setup_server();
    let sym = "TCS.NS";

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v8/finance/chart/{sym}"))
            .query_param("range", "1d")
            .query_param("interval", "5m");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::chart_body(&[1_704_094_200], &[3500.0], &[42_000]));
    });

    let client = common::client_for(&server);
    let bars = HistoryBuilder::new(&client, sym)
        .range(Range::D1)
        .interval(Interval::I5m)
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].volume, Some(42_000));
}

#[tokio::test]
async fn rows_with_null_ohlc_are_dropped() {
    let server = common::setup_server();

    // Second point has open=null and must be filtered out.
    let body = r#"{
      "chart":{"result":[{"timestamp":[1704067200,1704153600],
        "indicators":{"quote":[{
          "open":[2900.0,null],
          "high":[2915.0,2920.0],
          "low":[2890.0,2900.0],
          "close":[2910.0,2912.0],
          "volume":[1000000,null]
        }]}}],"error":null}
    }"#;

    let mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/RELIANCE.NS");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });

    let client = common::client_for(&server);
    let bars = HistoryBuilder::new(&client, "RELIANCE.NS").fetch().await.unwrap();

    mock.assert();
    assert_eq!(bars.len(), 1, "null-open row should be filtered out");
    assert!((bars[0].close - 2910.0).abs() < 1e-9);
    assert_eq!(bars[0].volume, Some(1_000_000));
}

#[tokio::test]
async fn empty_timestamps_decode_to_an_empty_series() {
    let server = common::setup_server();

    let body = r#"{"chart":{"result":[{"timestamp":[],"indicators":{"quote":[{}]}}],"error":null}}"#;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/NOQUOTE.NS");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });

    let client = common::client_for(&server);
    let bars = HistoryBuilder::new(&client, "NOQUOTE.NS").fetch().await.unwrap();

    mock.assert();
    assert!(bars.is_empty());
}

#[tokio::test]
async fn provider_error_node_maps_to_data_error() {
    let server = common::setup_server();

    let body = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/GONE.NS");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });

    let client = common::client_for(&server);
    let err = HistoryBuilder::new(&client, "GONE.NS").fetch().await.unwrap_err();

    mock.assert();
    match err {
        WatchError::Data(msg) => assert!(msg.contains("No data found")),
        other => panic!("expected Data error, got {other:?}"),
    }
}

#[tokio::test]
async fn http_error_status_maps_to_status_error() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/RELIANCE.NS");
        then.status(500);
    });

    let client = common::client_for(&server);
    let err = HistoryBuilder::new(&client, "RELIANCE.NS").fetch().await.unwrap_err();

    mock.assert();
    assert!(matches!(err, WatchError::Status { status: 500, .. }));
}
