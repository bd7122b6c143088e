//! HTTP-level tests for the account router with in-memory providers.

mod common;

use std::sync::Arc;

use account_hex::{AccountService, RefreshableProperties, inbound::HttpServer};
use axum::http::StatusCode;
use demo_types::{CustomProperties, PaymentInfoError, PaymentInfoProvider};
use tower::ServiceExt;

use common::{EchoProvider, FailingProvider, SharedSource, get, json_body, post};

fn app_with<P: PaymentInfoProvider>(provider: P, description: Option<&str>) -> axum::Router {
    let properties = Arc::new(RefreshableProperties::fixed(CustomProperties::new(
        description.map(String::from),
    )));
    HttpServer::new(AccountService::new(provider, properties)).router()
}

#[tokio::test]
async fn test_account_info_example() {
    let app = app_with(EchoProvider, Some("svc-a"));

    let response = app.oneshot(get("/accounts/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(
        json_body(response).await,
        serde_json::json!({
            "paymentInfo": { "id": 42, "date": "2024-01-01T00:00:00Z" },
            "description": "svc-a"
        })
    );
}

#[tokio::test]
async fn test_description_demo_and_unset() {
    let response = app_with(EchoProvider, Some("demo"))
        .oneshot(get("/accounts/7"))
        .await
        .unwrap();
    assert_eq!(json_body(response).await["description"], "demo");

    let response = app_with(EchoProvider, None)
        .oneshot(get("/accounts/7"))
        .await
        .unwrap();
    let json = json_body(response).await;
    assert!(json["description"].is_null());
    assert_eq!(json["paymentInfo"]["id"], 7);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let response = app_with(EchoProvider, None)
        .oneshot(get("/accounts/forty-two"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], 400);
}

#[tokio::test]
async fn test_unavailable_payment_service_is_bad_gateway() {
    let app = app_with(
        FailingProvider(|| PaymentInfoError::Unavailable("connection refused".into())),
        Some("demo"),
    );

    let response = app.oneshot(get("/accounts/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = json_body(response).await;
    assert!(json.get("paymentInfo").is_none());
    assert_eq!(json["code"], 502);
}

#[tokio::test]
async fn test_payment_timeout_is_gateway_timeout() {
    let app = app_with(FailingProvider(|| PaymentInfoError::Timeout), None);

    let response = app.oneshot(get("/accounts/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn test_refresh_picks_up_new_description() {
    let source = SharedSource::new(Some("before"));
    let properties = Arc::new(RefreshableProperties::new(source.clone()).unwrap());
    let app = HttpServer::new(AccountService::new(EchoProvider, properties)).router();

    let response = app.clone().oneshot(get("/accounts/1")).await.unwrap();
    assert_eq!(json_body(response).await["description"], "before");

    // Changing the source alone does not affect responses.
    source.set(Some("after"));
    let response = app.clone().oneshot(get("/accounts/1")).await.unwrap();
    assert_eq!(json_body(response).await["description"], "before");

    let response = app.clone().oneshot(post("/actuator/refresh")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        serde_json::json!(["custom.description"])
    );

    let response = app.clone().oneshot(get("/accounts/1")).await.unwrap();
    assert_eq!(json_body(response).await["description"], "after");

    // A second refresh with no change reports nothing.
    let response = app.oneshot(post("/actuator/refresh")).await.unwrap();
    assert_eq!(json_body(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_failed_refresh_is_server_error_and_keeps_description() {
    let source = SharedSource::new(Some("kept"));
    let properties = Arc::new(RefreshableProperties::new(source.clone()).unwrap());
    let app = HttpServer::new(AccountService::new(EchoProvider, properties)).router();

    source.fail("gone");
    let response = app.clone().oneshot(post("/actuator/refresh")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = json_body(response).await;
    assert_eq!(json["code"], 500);
    assert!(json["error"].as_str().unwrap().contains("gone"));

    let response = app.oneshot(get("/accounts/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["description"], "kept");
    assert_eq!(json["paymentInfo"]["id"], 3);
}

#[tokio::test]
async fn test_health_and_openapi() {
    let app = app_with(EchoProvider, None);

    let response = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "healthy");

    let response = app.oneshot(get("/api-docs/openapi.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert!(json["paths"]["/accounts/{id}"].is_object());
    assert!(json["paths"]["/actuator/refresh"].is_object());
}
