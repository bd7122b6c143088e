//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use demo_types::{AccountId, AccountInfo, PaymentInfo};
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

/// Get account info
///
/// Calls the payment service and attaches the configured description.
#[utoipa::path(
    get,
    path = "/accounts/{id}",
    tag = "accounts",
    params(
        ("id" = i64, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account info", body = AccountInfo,
            example = json!({"paymentInfo": {"id": 42, "date": "2024-01-01T00:00:00Z"}, "description": "svc-a"})),
        (status = 400, description = "Account ID is not a 64-bit integer"),
        (status = 502, description = "Payment service unreachable or returned an error"),
        (status = 504, description = "Payment service timed out")
    )
)]
async fn get_account_info() {}

/// Refresh runtime properties
///
/// Re-reads the `custom.*` properties and returns the keys that changed.
#[utoipa::path(
    post,
    path = "/actuator/refresh",
    tag = "actuator",
    responses(
        (status = 200, description = "Changed property keys", body = Vec<String>, example = json!(["custom.description"])),
        (status = 500, description = "Properties source could not be read")
    )
)]
async fn refresh() {}

/// OpenAPI documentation for the Account API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Account Service API",
        version = "1.0.0",
        description = "Composes payment records from the payment service with a configurable description.",
        license(name = "MIT"),
    ),
    paths(health, get_account_info, refresh),
    components(schemas(AccountInfo, PaymentInfo, AccountId)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "accounts", description = "Account info lookup"),
        (name = "actuator", description = "Runtime management"),
    )
)]
pub struct ApiDoc;
