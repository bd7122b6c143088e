//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use demo_types::{AccountId, AccountInfo, AppError, PaymentInfoProvider};

use crate::AccountService;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState<P: PaymentInfoProvider> {
    pub service: AccountService<P>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::UpstreamTimeout(msg) => (StatusCode::GATEWAY_TIMEOUT, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", message);
        }

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// OpenAPI document.
pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Get account info (payment record + description).
#[tracing::instrument(skip(state), fields(account_id = %id))]
pub async fn get_account_info<P: PaymentInfoProvider>(
    State(state): State<Arc<AppState<P>>>,
    Path(id): Path<String>,
) -> Result<Json<AccountInfo>, ApiError> {
    let account_id: AccountId = id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid account ID: {}", id)))?;

    tracing::info!("Handling getAccountInfo, id={}", account_id);

    let info = state.service.get_account_info(account_id).await?;
    Ok(Json(info))
}

/// Re-read the refreshable properties.
#[tracing::instrument(skip(state))]
pub async fn refresh<P: PaymentInfoProvider>(
    State(state): State<Arc<AppState<P>>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let changed = state.service.refresh_properties().await?;
    Ok(Json(changed))
}
