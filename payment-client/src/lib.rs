//! # Payment Client SDK
//!
//! A typed Rust client for the Payment API. Every call builds its URL
//! explicitly, runs under a request timeout, and decodes JSON explicitly.

use std::time::Duration;

use demo_types::{AccountId, PaymentInfo, PaymentInfoError, PaymentInfoProvider};
use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ClientError> for PaymentInfoError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) => PaymentInfoError::Unavailable(e.to_string()),
            ClientError::Timeout(_) => PaymentInfoError::Timeout,
            ClientError::Api { status, message } => PaymentInfoError::Rejected { status, message },
            ClientError::Json(e) => PaymentInfoError::InvalidResponse(e.to_string()),
        }
    }
}

/// Payment API client.
#[derive(Debug, Clone)]
pub struct PaymentClient {
    base_url: String,
    timeout: Duration,
    http: Client,
}

impl PaymentClient {
    /// Creates a new client whose requests time out after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            http,
        })
    }

    /// Base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        Ok(resp.status().is_success())
    }

    /// Fetches the payment record for an account.
    #[tracing::instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn get_payment_info(&self, id: AccountId) -> Result<PaymentInfo, ClientError> {
        self.get(&format!("/paymentInfo/accounts/{}", id)).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        demo_telemetry::inject_current_context(&mut headers);

        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .headers(headers)
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await.map_err(|e| self.classify(e))?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    fn classify(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.timeout)
        } else {
            ClientError::Http(err)
        }
    }
}

#[async_trait::async_trait]
impl PaymentInfoProvider for PaymentClient {
    async fn get_payment_info(&self, id: AccountId) -> Result<PaymentInfo, PaymentInfoError> {
        PaymentClient::get_payment_info(self, id)
            .await
            .map_err(|e| {
                tracing::warn!(account_id = %id, error = %e, "Payment service call failed");
                e.into()
            })
    }
}
