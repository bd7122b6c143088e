//! Properties source port.

use crate::domain::CustomProperties;
use crate::error::PropertiesError;

/// Where the refreshable `custom.*` properties are read from.
///
/// `load` is called once at startup and again on every refresh.
pub trait PropertiesSource: Send + Sync + 'static {
    fn load(&self) -> Result<CustomProperties, PropertiesError>;
}

/// A source that always yields the same properties.
#[derive(Debug, Clone, Default)]
pub struct StaticProperties(pub CustomProperties);

impl PropertiesSource for StaticProperties {
    fn load(&self) -> Result<CustomProperties, PropertiesError> {
        Ok(self.0.clone())
    }
}
