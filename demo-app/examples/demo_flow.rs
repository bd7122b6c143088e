//! Runs both services in-process and walks through the account -> payment flow.
//!
//! Run with: cargo run -p demo-app --example demo_flow

use std::sync::Arc;
use std::time::Duration;

use account_hex::{AccountService, RefreshableProperties};
use demo_app::EnvProperties;
use payment_client::PaymentClient;
use payment_hex::{DelayStrategy, PaymentService};
use tempfile::NamedTempFile;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Payment service with a short delay so the demo stays quick
    let payment_listener = TcpListener::bind("127.0.0.1:0").await?;
    let payment_url = format!("http://{}", payment_listener.local_addr()?);
    let payment_server = payment_hex::inbound::HttpServer::new(PaymentService::new(
        DelayStrategy::Uniform {
            max: Duration::from_millis(300),
        },
    ));
    tokio::spawn(payment_server.serve(payment_listener, std::future::pending()));

    // Account service reading its description from a temp file
    let properties_file = NamedTempFile::new()?;
    std::fs::write(properties_file.path(), "CUSTOM_DESCRIPTION=svc-a\n")?;
    let source = EnvProperties::new(Some(properties_file.path().to_path_buf()), None);

    let account_listener = TcpListener::bind("127.0.0.1:0").await?;
    let account_url = format!("http://{}", account_listener.local_addr()?);
    let client = PaymentClient::new(&payment_url, Duration::from_secs(5))?;
    let service = AccountService::new(client, Arc::new(RefreshableProperties::new(source)?));
    let account_server = account_hex::inbound::HttpServer::new(service);
    tokio::spawn(account_server.serve(account_listener, std::future::pending()));

    println!("🚀 payment-service at {payment_url}");
    println!("🚀 account-service at {account_url}");

    let http = reqwest::Client::new();

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: account lookup
    // ─────────────────────────────────────────────────────────────────────────
    let body: serde_json::Value = http
        .get(format!("{account_url}/accounts/42"))
        .send()
        .await?
        .json()
        .await?;
    println!("\nGET /accounts/42\n{}", serde_json::to_string_pretty(&body)?);

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: refresh the description without restarting
    // ─────────────────────────────────────────────────────────────────────────
    std::fs::write(properties_file.path(), "CUSTOM_DESCRIPTION=svc-b\n")?;
    let changed: serde_json::Value = http
        .post(format!("{account_url}/actuator/refresh"))
        .send()
        .await?
        .json()
        .await?;
    println!("\nPOST /actuator/refresh -> {changed}");

    let body: serde_json::Value = http
        .get(format!("{account_url}/accounts/43"))
        .send()
        .await?
        .json()
        .await?;
    println!("\nGET /accounts/43\n{}", serde_json::to_string_pretty(&body)?);

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: bad input
    // ─────────────────────────────────────────────────────────────────────────
    let resp = http.get(format!("{account_url}/accounts/abc")).send().await?;
    println!("\nGET /accounts/abc -> {}", resp.status());

    Ok(())
}
