//! Optional TOML configuration for identity defaults
//!
//! A config file lets users pin the author name and email instead of relying
//! on environment discovery. The file is tiny:
//!
//! ```toml
//! [identity]
//! name = "Ann Example"
//! email = "ann@example.com"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// User configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Author name used before environment discovery
    pub name: Option<String>,
    /// Contact email used before environment discovery
    pub email: Option<String>,
}

/// TOML structure for deserializing config files
#[derive(Deserialize)]
struct TomlConfig {
    identity: Option<TomlIdentity>,
}

#[derive(Deserialize)]
struct TomlIdentity {
    name: Option<String>,
    email: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;

        Ok(Config {
            name: parsed.identity.as_ref().and_then(|i| i.name.clone()),
            email: parsed.identity.as_ref().and_then(|i| i.email.clone()),
        })
    }
}
