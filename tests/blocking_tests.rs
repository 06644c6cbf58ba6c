//! Integration tests for the blocking client.
//!
//! The mock server runs on its own thread, so the same calls are exercised
//! from plain threads and from inside Tokio runtimes.
//!
//! Run with: cargo test --test blocking_tests

#![cfg(feature = "blocking")]

use std::time::Duration;

use rust_decimal_macros::dec;
use serde_json::json;
use tokio::runtime::Runtime;
use wiremock::matchers::{any, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use options_tools_rs::blocking::OptionsTools;
use options_tools_rs::prelude::*;

fn blocking_client(server: &MockServer) -> OptionsTools {
    let config = ClientConfig::default()
        .with_base_url(server.uri())
        .with_timeout(Duration::from_secs(5))
        .with_max_retries(2);
    OptionsTools::with_config("test-api-key", config).expect("client should build")
}

fn chain_body() -> serde_json::Value {
    json!({
        "status": "ok",
        "data": {
            "ticker": "GOOG",
            "spot_price": 172.5,
            "timestamp": "2025-01-02T15:30:00Z",
            "options": [{"strike": 170, "expiration": "2025-01-17", "type": "call"}]
        }
    })
}

async fn chain_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/options/chain/GOOG"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chain_body()))
        .mount(&server)
        .await;
    server
}

#[test]
fn test_chain_without_runtime() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(chain_server());

    let client = blocking_client(&server);
    let chain = client.chain("goog", ChainQuery::new()).unwrap();

    assert_eq!(chain.ticker, "GOOG");
    assert_eq!(chain.calls().count(), 1);

    // A second call gets a fresh runtime and must not reuse a stale connection.
    let chain = client.chain("GOOG", ChainQuery::new()).unwrap();
    assert_eq!(chain.spot_price, dec!(172.5));
}

#[tokio::test]
async fn test_chain_inside_current_thread_runtime() {
    let server = chain_server().await;

    let client = blocking_client(&server);
    let chain = client.chain("goog", ChainQuery::new()).unwrap();

    assert_eq!(chain.options.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_chain_inside_multi_thread_runtime() {
    let server = chain_server().await;

    let client = blocking_client(&server);
    let chain = client.chain("goog", ChainQuery::new()).unwrap();

    assert_eq!(chain.options.len(), 1);
}

#[tokio::test]
async fn test_errors_propagate_unchanged() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = blocking_client(&server);
    let err = client.usage().unwrap_err();

    assert!(matches!(err, Error::Server { status: 500 }), "{err:?}");
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[test]
fn test_exit_analysis_posts_body() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/analysis/exit/GOOG"))
            .and(body_json(json!({"entry_price": 150.0, "position": {"quantity": 10}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "ok",
                "data": {
                    "ticker": "GOOG",
                    "timestamp": "2025-01-02T15:30:00Z",
                    "signals": [],
                    "recommended_action": "hold",
                    "risk_score": 3.0,
                    "expected_return": 0.04
                }
            })))
            .expect(1)
            .mount(&server)
            .await;
        server
    });

    let client = blocking_client(&server);
    let analysis = client
        .exit_analysis("goog", dec!(150), &json!({"quantity": 10}))
        .unwrap();

    assert_eq!(analysis.recommended_action, "hold");
    assert!(analysis.strongest_signal().is_none());
}

#[test]
fn test_health_and_close() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
            .mount(&server)
            .await;
        server
    });

    let client = blocking_client(&server);
    assert_eq!(client.health_check().unwrap()["status"], "healthy");

    client.close().unwrap();
    assert!(client.is_closed().unwrap());
    assert!(matches!(client.health_check(), Err(Error::Closed)));
}
