//! Payment record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::account::AccountId;

/// Synthetic payment record produced by the payment service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaymentInfo {
    /// Account the record was generated for
    pub id: AccountId,
    /// Generation time (RFC 3339, UTC)
    #[schema(value_type = String, example = "2024-01-01T00:00:00Z")]
    pub date: DateTime<Utc>,
}

impl PaymentInfo {
    pub fn new(id: AccountId, date: DateTime<Utc>) -> Self {
        Self { id, date }
    }

    /// Creates a record stamped with the current wall-clock time.
    pub fn now(id: AccountId) -> Self {
        Self::new(id, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_info_decodes_wire_format() {
        let info: PaymentInfo =
            serde_json::from_str(r#"{"id":42,"date":"2024-01-01T00:00:00Z"}"#).unwrap();
        assert_eq!(info.id, AccountId::new(42));
        assert_eq!(info.date.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_now_is_stamped_with_current_time() {
        let before = Utc::now();
        let info = PaymentInfo::now(AccountId::new(5));
        let after = Utc::now();

        assert_eq!(info.id, AccountId::new(5));
        assert!(info.date >= before && info.date <= after);
    }
}
