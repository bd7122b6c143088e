//! Error types for the account and payment services.

/// Failures reaching the payment service through a [`crate::PaymentInfoProvider`].
#[derive(Debug, thiserror::Error)]
pub enum PaymentInfoError {
    #[error("Payment service unavailable: {0}")]
    Unavailable(String),

    #[error("Payment service timed out")]
    Timeout,

    #[error("Payment service rejected request: {status} - {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid payment service response: {0}")]
    InvalidResponse(String),
}

/// Failures reading the refreshable properties.
#[derive(Debug, thiserror::Error)]
pub enum PropertiesError {
    #[error("Properties source unreadable: {0}")]
    Unreadable(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Upstream timeout: {0}")]
    UpstreamTimeout(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PaymentInfoError> for AppError {
    fn from(err: PaymentInfoError) -> Self {
        match err {
            PaymentInfoError::Timeout => AppError::UpstreamTimeout(err.to_string()),
            e => AppError::Upstream(e.to_string()),
        }
    }
}

impl From<PropertiesError> for AppError {
    fn from(err: PropertiesError) -> Self {
        AppError::Internal(err.to_string())
    }
}
