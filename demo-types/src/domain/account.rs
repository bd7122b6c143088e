//! Account domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::payment::PaymentInfo;

/// Identifier of an account.
///
/// Any 64-bit integer is accepted; the services do not validate ranges.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = i64, example = 42)]
pub struct AccountId(i64);

impl AccountId {
    /// Creates an AccountId from a raw integer.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AccountId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Account view composed by the account service.
///
/// Lives for one request: built from the payment record and the description
/// snapshot, then serialized and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    /// Payment record fetched from the payment service
    pub payment_info: PaymentInfo,
    /// Configured description, `null` when unset
    #[schema(example = "svc-a")]
    pub description: Option<String>,
}

impl AccountInfo {
    /// Wraps a payment record together with the configured description.
    pub fn new(payment_info: PaymentInfo, description: Option<String>) -> Self {
        Self {
            payment_info,
            description,
        }
    }

    /// Returns the id of the embedded payment record.
    pub fn account_id(&self) -> AccountId {
        self.payment_info.id
    }
}
