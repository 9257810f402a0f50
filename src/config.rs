//! Marketplace configuration.
//!
//! Loaded from a TOML file; every section and field has a default, so an empty
//! file (or no file at all) yields a working setup.
//!
//! ```toml
//! [actors]
//! channel_capacity = 32
//!
//! [checkout]
//! accepted_payment_methods = ["credit_card", "debit_card", "pix", "cash"]
//!
//! [logging]
//! filter = "info"
//! ```

use crate::model::PaymentMethod;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Parse(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub actors: ActorsConfig,
    #[serde(default)]
    pub checkout: CheckoutConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorsConfig {
    /// Bound of every actor's request channel.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    #[serde(default = "default_payment_methods")]
    pub accepted_payment_methods: Vec<PaymentMethod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_channel_capacity() -> usize {
    32
}

fn default_payment_methods() -> Vec<PaymentMethod> {
    PaymentMethod::ALL.to_vec()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ActorsConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            accepted_payment_methods: default_payment_methods(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Reads and validates a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.actors.channel_capacity == 0 {
            return Err(ConfigError::Validation(
                "actors.channel_capacity must be greater than 0".into(),
            ));
        }
        if self.checkout.accepted_payment_methods.is_empty() {
            return Err(ConfigError::Validation(
                "checkout.accepted_payment_methods cannot be empty".into(),
            ));
        }
        Ok(())
    }
}

impl std::str::FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.actors.channel_capacity, 32);
        assert_eq!(config.checkout.accepted_payment_methods.len(), 4);
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[actors]
channel_capacity = 8

[checkout]
accepted_payment_methods = ["pix", "cash"]
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.actors.channel_capacity, 8);
        assert_eq!(
            config.checkout.accepted_payment_methods,
            vec![PaymentMethod::Pix, PaymentMethod::Cash]
        );
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_validation_errors() {
        let zero = "[actors]\nchannel_capacity = 0\n".parse::<Config>();
        assert!(matches!(zero, Err(ConfigError::Validation(_))));

        let none = "[checkout]\naccepted_payment_methods = []\n".parse::<Config>();
        assert!(matches!(none, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_unknown_payment_method_is_a_parse_error() {
        let result = "[checkout]\naccepted_payment_methods = [\"bitcoin\"]\n".parse::<Config>();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
