//! Runtime-refreshable `custom.*` properties.

use serde::{Deserialize, Serialize};

/// Property group injected into every account response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomProperties {
    pub description: Option<String>,
}

impl CustomProperties {
    /// Builds the property group. Blank descriptions are treated as unset.
    pub fn new(description: Option<String>) -> Self {
        Self {
            description: description.filter(|d| !d.trim().is_empty()),
        }
    }

    /// Returns the dotted keys whose values differ between `self` and `other`.
    pub fn changed_keys(&self, other: &CustomProperties) -> Vec<String> {
        let mut keys = Vec::new();
        if self.description != other.description {
            keys.push("custom.description".to_string());
        }
        keys
    }
}
