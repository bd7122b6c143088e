//! # Payment Server
//!
//! Binary that wires together the payment service:
//! - Load configuration from environment
//! - Create the payment service with its delay strategy
//! - Start the HTTP server

use demo_app::{PaymentConfig, shutdown_signal};
use payment_hex::{PaymentService, inbound::HttpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let telemetry = demo_telemetry::init(
        "payment-service",
        "info,payment_server=debug,payment_hex=debug",
    )?;

    // Load configuration
    let config = PaymentConfig::from_env()?;

    tracing::info!("Starting payment server on port {}", config.port);
    tracing::info!("Using delay strategy: {}", config.delay);
    if telemetry.exporting() {
        tracing::info!("Exporting spans over OTLP");
    }

    let service = PaymentService::new(config.delay.clone());
    let server = HttpServer::new(service);

    server.run(&config.bind_addr(), shutdown_signal()).await?;

    // Ensure traces are flushed before exit
    telemetry.shutdown();
    Ok(())
}
