//! Client tests against a live payment server on an ephemeral port.

use std::time::Duration;

use chrono::Utc;
use demo_types::{AccountId, PaymentInfoError, PaymentInfoProvider};
use payment_client::{ClientError, DEFAULT_TIMEOUT, PaymentClient};
use payment_hex::{DelayStrategy, PaymentService, inbound::HttpServer};
use tokio::net::TcpListener;

/// Starts a payment server in the background and returns its base URL.
async fn spawn_payment_server(delay: DelayStrategy) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(PaymentService::new(delay));
    tokio::spawn(async move {
        server
            .serve(listener, std::future::pending())
            .await
            .unwrap();
    });

    format!("http://{addr}")
}

/// Returns a URL on which nothing is listening.
async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
async fn test_get_payment_info() {
    let base_url = spawn_payment_server(DelayStrategy::None).await;
    let client = PaymentClient::new(&base_url, DEFAULT_TIMEOUT).unwrap();

    let before = Utc::now();
    let info = client.get_payment_info(AccountId::new(42)).await.unwrap();
    let after = Utc::now();

    assert_eq!(info.id, AccountId::new(42));
    assert!(info.date >= before && info.date <= after);
}

#[tokio::test]
async fn test_health() {
    let base_url = spawn_payment_server(DelayStrategy::None).await;
    let client = PaymentClient::new(&base_url, DEFAULT_TIMEOUT).unwrap();

    assert!(client.health().await.unwrap());
}

#[tokio::test]
async fn test_non_success_status_is_api_error() {
    let base_url = spawn_payment_server(DelayStrategy::None).await;
    let client = PaymentClient::new(format!("{base_url}/missing"), DEFAULT_TIMEOUT).unwrap();

    let err = client.get_payment_info(AccountId::new(1)).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 404, .. }), "{err:?}");
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let base_url =
        spawn_payment_server(DelayStrategy::Discrete(vec![Duration::from_millis(500)])).await;
    let client = PaymentClient::new(&base_url, Duration::from_millis(50)).unwrap();

    let err = client.get_payment_info(AccountId::new(1)).await.unwrap_err();
    assert!(matches!(err, ClientError::Timeout(_)), "{err:?}");

    let err = PaymentInfoProvider::get_payment_info(&client, AccountId::new(1))
        .await
        .unwrap_err();
    assert!(matches!(err, PaymentInfoError::Timeout));
}

#[tokio::test]
async fn test_unreachable_server_is_unavailable() {
    let client = PaymentClient::new(unreachable_url().await, DEFAULT_TIMEOUT).unwrap();

    let err = PaymentInfoProvider::get_payment_info(&client, AccountId::new(1))
        .await
        .unwrap_err();
    assert!(matches!(err, PaymentInfoError::Unavailable(_)), "{err:?}");
}
