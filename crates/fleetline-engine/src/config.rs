//! Configuration loading and typed config structures for the Fleetline
//! service.
//!
//! The canonical configuration lives in `fleetline.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure and provides a loader that reads the file. Only the transport
//! surface is configurable: the route table and fleet are built in and
//! never loaded from external data.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level service configuration.
///
/// Mirrors the structure of `fleetline.yaml`. All fields have defaults so
/// a missing file still yields a runnable service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Observer HTTP server settings.
    #[serde(default)]
    pub server: ServerSection,

    /// API credential settings.
    #[serde(default)]
    pub auth: AuthSection,
}

impl EngineConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `FLEETLINE_API_TOKEN` overrides `auth.api_token`
    /// - `FLEETLINE_PORT` overrides `server.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment-variable overrides on top of the parsed values.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            std::env::var("FLEETLINE_API_TOKEN").ok(),
            std::env::var("FLEETLINE_PORT").ok(),
        );
    }

    /// Apply overrides from already-resolved values (separated from the
    /// environment lookup so it can be tested deterministically).
    fn apply_overrides(&mut self, api_token: Option<String>, port: Option<String>) {
        if let Some(token) = api_token {
            self.auth.api_token = token;
        }
        if let Some(port) = port
            && let Ok(port) = port.parse::<u16>()
        {
            self.server.port = port;
        }
    }
}

/// Observer HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// The host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// API credential configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthSection {
    /// The static bearer token expected on `/api` requests.
    #[serde(default = "default_api_token")]
    pub api_token: String,
}

impl Default for AuthSection {
    fn default() -> Self {
        Self {
            api_token: default_api_token(),
        }
    }
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8080
}

fn default_api_token() -> String {
    String::from("change-me")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_yields_defaults() {
        let config = EngineConfig::parse("{}").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.auth.api_token, "change-me");
    }

    #[test]
    fn full_yaml_is_parsed() {
        let yaml = r"
server:
  host: 127.0.0.1
  port: 9001
auth:
  api_token: sekrit
";
        let config = EngineConfig::parse(yaml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.auth.api_token, "sekrit");
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let yaml = r"
auth:
  api_token: sekrit
";
        let config = EngineConfig::parse(yaml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.auth.api_token, "sekrit");
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let result = EngineConfig::parse("server: [not a map");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn overrides_replace_token_and_port() {
        let mut config = EngineConfig::default();
        config.apply_overrides(Some(String::from("from-env")), Some(String::from("9999")));
        assert_eq!(config.auth.api_token, "from-env");
        assert_eq!(config.server.port, 9999);
    }

    #[test]
    fn unparseable_port_override_is_ignored() {
        let mut config = EngineConfig::default();
        config.apply_overrides(None, Some(String::from("not-a-port")));
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.auth.api_token, "change-me");
    }
}
