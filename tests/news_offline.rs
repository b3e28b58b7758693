mod common;

use httpmock::Method::GET;
use nsewatch::{NewsBuilder, NewsState, WatchError};

#[tokio::test]
async fn latest_article_request_carries_all_filters() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v4/search")
            .query_param("q", "TCS")
            .query_param("country", "in")
            .query_param("lang", "en")
            .query_param("max", "1")
            .query_param("token", "test-key");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::news_body(
                "TCS wins large European deal",
                "https://example.com/tcs-deal",
            ));
    });

    let client = common::client_for(&server);
    let articles = NewsBuilder::new(&client, "TCS")
        .country("in")
        .lang("en")
        .max_results(1)
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(articles.len(), 1);
    let first = &articles[0];
    assert_eq!(first.title, "TCS wins large European deal");
    assert_eq!(first.link.as_deref(), Some("https://example.com/tcs-deal"));
    assert_eq!(first.source.as_deref(), Some("Newswire"));
    assert!(first.published_at.is_some());
}

#[tokio::test]
async fn empty_result_list_decodes_to_no_articles() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v4/search");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"totalArticles":0,"articles":[]}"#);
    });

    let client = common::client_for(&server);
    let articles = NewsBuilder::new(&client, "INFY").fetch().await.unwrap();

    mock.assert();
    assert!(articles.is_empty());
}

#[tokio::test]
async fn untitled_items_are_skipped() {
    let server = common::setup_server();

    let body = r#"{"articles":[{"url":"https://example.com/x"},{"title":"Kept","url":"https://example.com/y"}]}"#;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v4/search");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });

    let client = common::client_for(&server);
    let articles = NewsBuilder::new(&client, "INFY").fetch().await.unwrap();

    mock.assert();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title, "Kept");
}

#[tokio::test]
async fn http_error_status_propagates() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v4/search");
        then.status(403);
    });

    let client = common::client_for(&server);
    let err = NewsBuilder::new(&client, "INFY").fetch().await.unwrap_err();

    mock.assert();
    assert!(matches!(err, WatchError::Status { status: 403, .. }));
}

#[test]
fn headline_dedup_is_per_symbol_and_exact() {
    let mut state = NewsState::new();

    assert!(state.observe("TCS", "X raises guidance"));
    assert!(!state.observe("TCS", "X raises guidance"));
    assert!(state.observe("TCS", "X cuts guidance"));
    assert_eq!(state.last_headline("TCS"), Some("X cuts guidance"));

    // No case folding: a different casing counts as a new headline.
    assert!(state.observe("TCS", "X CUTS GUIDANCE"));

    // No cross-symbol dedup: the same headline is new per symbol.
    assert!(state.observe("INFY", "X CUTS GUIDANCE"));
    assert_eq!(state.last_headline("RELIANCE"), None);
}
