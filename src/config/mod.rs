//! Site configuration
//!
//! Configuration is layered, lowest priority first:
//!
//! 1. Hardcoded defaults
//! 2. TOML file (`portfolio.toml` in the working directory, or `--config`)
//! 3. Environment variables (`PORTFOLIO_*`)
//!
//! Validation reports every problem at once rather than stopping at the
//! first one.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Valid log levels for configuration validation.
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

pub const DEFAULT_CONFIG_FILE: &str = "portfolio.toml";

pub const DEFAULT_SUCCESS_MESSAGE: &str =
    "Thank you for your message! I'll get back to you within 24 hours.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub contact: ContactSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allow cross-origin requests from any origin.
    #[serde(default = "default_permissive_cors")]
    pub permissive_cors: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// YAML or JSON catalog file; the builtin dataset is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSettings {
    #[serde(default = "default_success_message")]
    pub success_message: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            server: ServerSettings::default(),
            catalog: CatalogSettings::default(),
            contact: ContactSettings::default(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            permissive_cors: default_permissive_cors(),
        }
    }
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            success_message: default_success_message(),
        }
    }
}

// Default value functions for serde
fn default_log_level() -> String {
    "info".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_permissive_cors() -> bool {
    true
}

fn default_success_message() -> String {
    DEFAULT_SUCCESS_MESSAGE.to_string()
}

impl SiteConfig {
    /// Load configuration from `path`, or from `portfolio.toml` when it
    /// exists, then apply environment overrides and validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.merge_env_vars();
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn merge_env_vars(&mut self) {
        self.merge_env_with(|key| std::env::var(key).ok());
    }

    /// Apply `PORTFOLIO_*` overrides from an arbitrary lookup.
    pub fn merge_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup("PORTFOLIO_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(host) = lookup("PORTFOLIO_HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("PORTFOLIO_PORT") {
            match port.parse::<u16>() {
                Ok(value) => self.server.port = value,
                Err(_) => tracing::warn!("Ignoring invalid PORTFOLIO_PORT value '{}'", port),
            }
        }

        if let Some(path) = lookup("PORTFOLIO_CATALOG") {
            self.catalog.path = Some(PathBuf::from(path));
        }
    }

    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            errors.push(format!(
                "log_level must be one of: {} (got '{}')",
                VALID_LOG_LEVELS.join(", "),
                self.log_level
            ));
        }

        if self.server.host.trim().is_empty() {
            errors.push("server.host cannot be empty".to_string());
        } else if self.socket_addr().is_err() {
            errors.push(format!(
                "server.host '{}' is not a valid IP address",
                self.server.host
            ));
        }

        if self.contact.success_message.trim().is_empty() {
            errors.push("contact.success_message cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Config(errors.join("; ")))
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| Error::Config(format!("Invalid listen address: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.server.port, 3000);
        assert!(config.server.permissive_cors);
        assert!(config.catalog.path.is_none());
        assert_eq!(config.contact.success_message, DEFAULT_SUCCESS_MESSAGE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SiteConfig::from_toml(
            r#"
log_level = "debug"

[server]
port = 8080
"#,
        )
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.contact.success_message, DEFAULT_SUCCESS_MESSAGE);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            SiteConfig::from_toml("server = 3"),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("PORTFOLIO_LOG_LEVEL", "warn"),
            ("PORTFOLIO_HOST", "0.0.0.0"),
            ("PORTFOLIO_PORT", "9000"),
            ("PORTFOLIO_CATALOG", "catalog.yaml"),
        ]
        .into_iter()
        .collect();

        let mut config = SiteConfig::default();
        config.merge_env_with(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.catalog.path, Some(PathBuf::from("catalog.yaml")));
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = SiteConfig::default();
        config.merge_env_with(|key| (key == "PORTFOLIO_PORT").then(|| "http".to_string()));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_validation_accumulates_errors() {
        let mut config = SiteConfig::default();
        config.log_level = "loud".to_string();
        config.server.host = "not an address".to_string();
        config.contact.success_message = "  ".to_string();

        let message = config.validate().unwrap_err().to_string();
        assert!(message.contains("log_level"));
        assert!(message.contains("server.host"));
        assert!(message.contains("contact.success_message"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(&path, "[contact]\nsuccess_message = \"Thanks!\"\n").unwrap();

        let config = SiteConfig::from_file(&path).unwrap();
        assert_eq!(config.contact.success_message, "Thanks!");
        assert!(SiteConfig::from_file(&dir.path().join("missing.toml")).is_err());
    }
}
