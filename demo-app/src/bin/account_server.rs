//! # Account Server
//!
//! Binary that wires together the account service:
//! - Load configuration from environment
//! - Build the payment client and the refreshable properties
//! - Start the HTTP server

use std::sync::Arc;

use account_hex::{AccountService, RefreshableProperties, inbound::HttpServer};
use demo_app::{AccountConfig, shutdown_signal};
use payment_client::PaymentClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let telemetry = demo_telemetry::init(
        "account-service",
        "info,account_server=debug,account_hex=debug,payment_client=debug",
    )?;

    // Load configuration
    let config = AccountConfig::from_env()?;

    config.log_summary();

    let client = PaymentClient::new(&config.payment_service_url, config.payment_timeout)?;
    let properties = Arc::new(RefreshableProperties::new(config.properties_source())?);

    let service = AccountService::new(client, properties);
    let server = HttpServer::new(service);

    server.run(&config.bind_addr(), shutdown_signal()).await?;

    // Ensure traces are flushed before exit
    telemetry.shutdown();
    Ok(())
}
