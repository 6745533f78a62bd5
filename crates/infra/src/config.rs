//! Process configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use restock_parties::ContactAddress;

use crate::delivery::sendgrid::DEFAULT_ENDPOINT;
use crate::delivery::Sender;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_SENDER_NAME: &str = "Pharmacy";
/// Sender used with the recording provider when no address is configured.
pub const DEFAULT_SENDER_EMAIL: &str = "replenishment@example.com";
pub const DEFAULT_DELIVERY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

fn invalid(name: &'static str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        name,
        reason: reason.to_string(),
    }
}

/// Settings for the real mail provider.
#[derive(Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    pub api_key: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for DeliveryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliveryConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// `None` → in-memory store.
    pub database_url: Option<String>,
    /// JSON seed for the in-memory store; ignored when `database_url` is set.
    pub catalog_seed_path: Option<PathBuf>,
    pub sender: Sender,
    /// `None` → recording provider, nothing leaves the process.
    pub delivery: Option<DeliveryConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary lookup. Empty or blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| invalid("BIND_ADDR", e))?;

        let api_key = get("SENDGRID_API_KEY");

        let sender_email = match (get("SENDGRID_FROM_EMAIL"), &api_key) {
            (Some(email), _) => email,
            (None, Some(_)) => return Err(ConfigError::Missing("SENDGRID_FROM_EMAIL")),
            (None, None) => DEFAULT_SENDER_EMAIL.to_string(),
        };
        let sender_email = ContactAddress::parse(sender_email)
            .map_err(|e| invalid("SENDGRID_FROM_EMAIL", e))?;
        let sender_name = get("SENDGRID_FROM_NAME").unwrap_or_else(|| DEFAULT_SENDER_NAME.to_string());

        let timeout_secs = match get("DELIVERY_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(0) => return Err(invalid("DELIVERY_TIMEOUT_SECS", "must be positive")),
                Ok(secs) => secs,
                Err(e) => return Err(invalid("DELIVERY_TIMEOUT_SECS", e)),
            },
            None => DEFAULT_DELIVERY_TIMEOUT_SECS,
        };

        let delivery = api_key.map(|api_key| DeliveryConfig {
            api_key,
            endpoint: get("SENDGRID_API_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        });

        Ok(Self {
            bind_addr,
            database_url: get("DATABASE_URL"),
            catalog_seed_path: get("CATALOG_SEED_PATH").map(PathBuf::from),
            sender: Sender::new(sender_email.as_str(), sender_name),
            delivery,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.database_url, None);
        assert_eq!(cfg.catalog_seed_path, None);
        assert_eq!(cfg.sender, Sender::new(DEFAULT_SENDER_EMAIL, "Pharmacy"));
        assert!(cfg.delivery.is_none());
    }

    #[test]
    fn full_sendgrid_settings() {
        let cfg = config(&[
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("DATABASE_URL", "postgres://localhost/stock"),
            ("SENDGRID_API_KEY", "SG.key"),
            ("SENDGRID_FROM_EMAIL", "stock@pharmacy.example"),
            ("SENDGRID_FROM_NAME", "Central Pharmacy"),
            ("DELIVERY_TIMEOUT_SECS", "5"),
        ])
        .unwrap();

        assert_eq!(cfg.bind_addr.port(), 9000);
        assert_eq!(cfg.database_url.as_deref(), Some("postgres://localhost/stock"));
        assert_eq!(cfg.sender, Sender::new("stock@pharmacy.example", "Central Pharmacy"));

        let delivery = cfg.delivery.unwrap();
        assert_eq!(delivery.api_key, "SG.key");
        assert_eq!(delivery.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(delivery.timeout, Duration::from_secs(5));
    }

    #[test]
    fn catalog_seed_path_is_read() {
        let cfg = config(&[("CATALOG_SEED_PATH", "/etc/restock/seed.json")]).unwrap();
        assert_eq!(
            cfg.catalog_seed_path,
            Some(PathBuf::from("/etc/restock/seed.json"))
        );
    }

    #[test]
    fn api_key_requires_sender_address() {
        assert_eq!(
            config(&[("SENDGRID_API_KEY", "SG.key")]).unwrap_err(),
            ConfigError::Missing("SENDGRID_FROM_EMAIL")
        );
    }

    #[test]
    fn blank_values_count_as_unset() {
        let cfg = config(&[("SENDGRID_API_KEY", "  "), ("DATABASE_URL", "")]).unwrap();
        assert!(cfg.delivery.is_none());
        assert!(cfg.database_url.is_none());
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(matches!(
            config(&[("BIND_ADDR", "not an addr")]),
            Err(ConfigError::Invalid { name: "BIND_ADDR", .. })
        ));
        assert!(matches!(
            config(&[("SENDGRID_FROM_EMAIL", "nobody")]),
            Err(ConfigError::Invalid { name: "SENDGRID_FROM_EMAIL", .. })
        ));
        assert!(matches!(
            config(&[("DELIVERY_TIMEOUT_SECS", "0")]),
            Err(ConfigError::Invalid { name: "DELIVERY_TIMEOUT_SECS", .. })
        ));
        assert!(matches!(
            config(&[("DELIVERY_TIMEOUT_SECS", "soon")]),
            Err(ConfigError::Invalid { name: "DELIVERY_TIMEOUT_SECS", .. })
        ));
    }

    #[test]
    fn debug_redacts_api_key() {
        let cfg = config(&[
            ("SENDGRID_API_KEY", "SG.secret"),
            ("SENDGRID_FROM_EMAIL", "stock@pharmacy.example"),
        ])
        .unwrap();
        assert!(!format!("{cfg:?}").contains("SG.secret"));
    }
}
