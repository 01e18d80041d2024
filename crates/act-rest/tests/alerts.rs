//! Mock API tests for price alert evaluation.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use act_core::models::{AlertDirection, PriceAlert};
use act_core::store::AlertStore;
use act_core::types::{ApiUrl, Symbol};
use act_rest::{AlertMonitor, Session};
use act_store::MemoryStore;

fn mock_session(server: &MockServer, store: Arc<MemoryStore>) -> Session {
    let api = ApiUrl::new(format!("http://127.0.0.1:{}/api", server.address().port())).unwrap();
    Session::new(api, store)
}

fn alert(symbol: &str, threshold: f64, direction: AlertDirection) -> PriceAlert {
    PriceAlert::new(Symbol::new(symbol).unwrap(), threshold, direction)
}

#[tokio::test]
async fn test_check_triggers_only_crossed_thresholds() {
    let server = MockServer::start().await;

    // Two alerts on the same symbol share one quote fetch.
    Mock::given(method("GET"))
        .and(path("/api/act-ai/stock-data/"))
        .and(query_param("symbol", "AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"c": 150.0})))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::with_tokens(Some("tokA"), None));
    store
        .put_alerts(&[
            alert("AAPL", 100.0, AlertDirection::Above),
            alert("AAPL", 50.0, AlertDirection::Below),
        ])
        .await
        .unwrap();

    let session = mock_session(&server, store.clone());
    let monitor = AlertMonitor::new(session, store);

    let triggered = monitor.check().await.unwrap();
    assert_eq!(triggered.len(), 1);
    assert_eq!(triggered[0].alert.symbol.as_str(), "AAPL");
    assert_eq!(triggered[0].alert.threshold, 100.0);
    assert_eq!(triggered[0].price, 150.0);
}

#[tokio::test]
async fn test_check_skips_symbols_whose_quote_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/act-ai/stock-data/"))
        .and(query_param("symbol", "AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"c": 150.0})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/act-ai/stock-data/"))
        .and(query_param("symbol", "TSLA"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "upstream down"})))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::with_tokens(Some("tokA"), None));
    store
        .put_alerts(&[
            alert("TSLA", 100.0, AlertDirection::Above),
            alert("AAPL", 100.0, AlertDirection::Above),
        ])
        .await
        .unwrap();

    let session = mock_session(&server, store.clone());
    let monitor = AlertMonitor::new(session, store);

    // The TSLA failure must not poison the AAPL alert.
    let triggered = monitor.check().await.unwrap();
    assert_eq!(triggered.len(), 1);
    assert_eq!(triggered[0].alert.symbol.as_str(), "AAPL");
}

#[tokio::test]
async fn test_check_with_no_alerts_makes_no_quote_calls() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/act-ai/stock-data/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"c": 1.0})))
        .expect(0)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::with_tokens(Some("tokA"), None));
    let session = mock_session(&server, store.clone());
    let monitor = AlertMonitor::new(session, store);

    assert!(monitor.check().await.unwrap().is_empty());
}
