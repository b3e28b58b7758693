#![allow(dead_code)]

use httpmock::{
    Method::{GET, POST},
    Mock, MockServer,
};
use serde_json::json;
use url::Url;

use nsewatch::{Notifier, WatchClient};

pub const BOT_TOKEN: &str = "test-token";
pub const CHAT_ID: &str = "42";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// Client with every outbound base pointed at the mock server.
pub fn client_for(server: &MockServer) -> WatchClient {
    WatchClient::builder()
        .base_chart(Url::parse(&format!("{}/v8/finance/chart/", server.base_url())).unwrap())
        .base_news(Url::parse(&format!("{}/api/v4/", server.base_url())).unwrap())
        .base_telegram(Url::parse(&format!("{}/", server.base_url())).unwrap())
        .news_api_key("test-key")
        .build()
        .unwrap()
}

pub fn notifier_for(client: &WatchClient) -> Notifier {
    Notifier::new(client, BOT_TOKEN, CHAT_ID)
}

/// Minimal chart v8 payload built from parallel rows.
///
/// Open/high/low mirror the close; slices must share one length.
pub fn chart_body(timestamps: &[i64], closes: &[f64], volumes: &[u64]) -> String {
    json!({
        "chart": {
            "result": [{
                "timestamp": timestamps,
                "indicators": {
                    "quote": [{
                        "open": closes,
                        "high": closes,
                        "low": closes,
                        "close": closes,
                        "volume": volumes
                    }]
                }
            }],
            "error": null
        }
    })
    .to_string()
}

/// Minimal GNews search payload with a single article.
pub fn news_body(title: &str, link: &str) -> String {
    json!({
        "totalArticles": 1,
        "articles": [{
            "title": title,
            "description": "synthetic",
            "url": link,
            "publishedAt": "2025-06-02T09:30:00Z",
            "source": { "name": "Newswire" }
        }]
    })
    .to_string()
}

pub fn mock_daily<'a>(server: &'a MockServer, symbol: &str, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v8/finance/chart/{symbol}"))
            .query_param("interval", "1d");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_intraday<'a>(server: &'a MockServer, symbol: &str, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v8/finance/chart/{symbol}"))
            .query_param("interval", "5m");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_news<'a>(server: &'a MockServer, query: &str, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v4/search")
            .query_param("q", query);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_telegram(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(POST).path(format!("/bot{BOT_TOKEN}/sendMessage"));
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"ok":true,"result":{}}"#);
    })
}
