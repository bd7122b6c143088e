//! Configuration loading from environment.
//!
//! Both binaries call `dotenvy::dotenv()` first, so a `.env` file in the
//! working directory fills in anything the process environment leaves unset.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use demo_types::{CustomProperties, PropertiesError, PropertiesSource};
use payment_client::DEFAULT_TIMEOUT;
use payment_hex::DelayStrategy;

pub const PORT_ENV: &str = "PORT";
pub const PAYMENT_DELAY_ENV: &str = "PAYMENT_DELAY";
pub const PAYMENT_SERVICE_URL_ENV: &str = "PAYMENT_SERVICE_URL";
pub const PAYMENT_CLIENT_TIMEOUT_ENV: &str = "PAYMENT_CLIENT_TIMEOUT_MS";
pub const DESCRIPTION_ENV: &str = "CUSTOM_DESCRIPTION";
pub const PROPERTIES_FILE_ENV: &str = "ACCOUNT_PROPERTIES_FILE";
pub const VAULT_USERNAME_ENV: &str = "VAULT_USERNAME";
pub const VAULT_PASSWORD_ENV: &str = "VAULT_PASSWORD";

fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn parse_port(lookup: &impl Fn(&str) -> Option<String>, default: u16) -> anyhow::Result<u16> {
    match lookup(PORT_ENV) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{PORT_ENV} must be a port number, got '{raw}'")),
        None => Ok(default),
    }
}

/// Payment server configuration.
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    pub port: u16,
    pub delay: DelayStrategy,
}

impl PaymentConfig {
    pub const DEFAULT_PORT: u16 = 8081;

    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(env_lookup)
    }

    /// Loads configuration through `lookup` instead of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = parse_port(&lookup, Self::DEFAULT_PORT)?;

        let delay = match lookup(PAYMENT_DELAY_ENV) {
            Some(raw) => raw
                .parse::<DelayStrategy>()
                .with_context(|| format!("invalid {PAYMENT_DELAY_ENV}"))?,
            None => DelayStrategy::default(),
        };

        Ok(Self { port, delay })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// `vault.*` credentials. The password is never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct VaultSecret {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for VaultSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultSecret")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Account server configuration.
#[derive(Debug, Clone)]
pub struct AccountConfig {
    pub port: u16,
    /// Base URL of the payment service (`client.payment.url`).
    pub payment_service_url: String,
    pub payment_timeout: Duration,
    /// Description from the environment at startup.
    pub description: Option<String>,
    /// Refreshable dotenv-format file overriding `description`.
    pub properties_file: Option<PathBuf>,
    pub vault: Option<VaultSecret>,
}

impl AccountConfig {
    pub const DEFAULT_PORT: u16 = 8080;

    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(env_lookup)
    }

    /// Loads configuration through `lookup` instead of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = parse_port(&lookup, Self::DEFAULT_PORT)?;

        let payment_service_url = lookup(PAYMENT_SERVICE_URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!("{PAYMENT_SERVICE_URL_ENV} environment variable is required")
            })?;

        let payment_timeout = match lookup(PAYMENT_CLIENT_TIMEOUT_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .with_context(|| {
                    format!("{PAYMENT_CLIENT_TIMEOUT_ENV} must be milliseconds, got '{raw}'")
                })?,
            None => DEFAULT_TIMEOUT,
        };

        let vault = match (lookup(VAULT_USERNAME_ENV), lookup(VAULT_PASSWORD_ENV)) {
            (Some(username), Some(password)) => Some(VaultSecret { username, password }),
            (None, None) => None,
            _ => anyhow::bail!(
                "{VAULT_USERNAME_ENV} and {VAULT_PASSWORD_ENV} must be set together"
            ),
        };

        Ok(Self {
            port,
            payment_service_url,
            payment_timeout,
            description: lookup(DESCRIPTION_ENV),
            properties_file: lookup(PROPERTIES_FILE_ENV).map(PathBuf::from),
            vault,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Logs the effective configuration at startup. The vault secret is
    /// reported only as present.
    pub fn log_summary(&self) {
        tracing::info!("Starting account server on port {}", self.port);
        tracing::info!(
            "Using payment service: {} (timeout {:?})",
            self.payment_service_url,
            self.payment_timeout
        );
        match &self.properties_file {
            Some(path) => tracing::info!("Refreshable properties file: {}", path.display()),
            None => tracing::info!("No properties file; description fixed at startup"),
        }
        if self.vault.is_some() {
            tracing::info!("Vault credentials configured");
        }
    }

    /// The refreshable properties source described by this configuration.
    pub fn properties_source(&self) -> EnvProperties {
        EnvProperties::new(self.properties_file.clone(), self.description.clone())
    }
}

/// Reads `custom.description` from an optional dotenv-format file,
/// falling back to the value captured from the environment at startup.
///
/// The file is re-read on every load, so edits show up after a refresh.
#[derive(Debug, Clone)]
pub struct EnvProperties {
    file: Option<PathBuf>,
    fallback: Option<String>,
}

impl EnvProperties {
    pub fn new(file: Option<PathBuf>, fallback: Option<String>) -> Self {
        Self { file, fallback }
    }

    fn read_file(path: &Path) -> Result<Option<String>, PropertiesError> {
        let unreadable = |e: dotenvy::Error| {
            PropertiesError::Unreadable(format!("{}: {}", path.display(), e))
        };

        let mut description = None;
        for item in dotenvy::from_path_iter(path).map_err(unreadable)? {
            let (key, value) = item.map_err(unreadable)?;
            if key == DESCRIPTION_ENV {
                description = Some(value);
            }
        }
        Ok(description)
    }
}

impl PropertiesSource for EnvProperties {
    fn load(&self) -> Result<CustomProperties, PropertiesError> {
        let from_file = match &self.file {
            Some(path) => Self::read_file(path)?,
            None => None,
        };

        Ok(CustomProperties::new(
            from_file.or_else(|| self.fallback.clone()),
        ))
    }
}
