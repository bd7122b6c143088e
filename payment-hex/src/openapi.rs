//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use demo_types::{AccountId, PaymentInfo};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Get the payment record for an account
///
/// Waits a simulated processing delay before answering.
#[utoipa::path(
    get,
    path = "/paymentInfo/accounts/{id}",
    tag = "payments",
    params(
        ("id" = i64, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Synthetic payment record", body = PaymentInfo,
            example = json!({"id": 42, "date": "2024-01-01T00:00:00Z"})),
        (status = 400, description = "Account ID is not a 64-bit integer")
    )
)]
async fn get_payment_info() {}

/// OpenAPI documentation for the Payment API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payment Service API",
        version = "1.0.0",
        description = "Returns synthetic payment records after a simulated processing delay.",
        license(name = "MIT"),
    ),
    paths(health, get_payment_info),
    components(schemas(PaymentInfo, AccountId)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Payment record lookup"),
    )
)]
pub struct ApiDoc;
