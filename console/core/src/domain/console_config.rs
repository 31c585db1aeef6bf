// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0

// Console Configuration
//
// Kubernetes-style manifest (apiVersion/kind/metadata/spec) describing:
// - the backend base address every proxy call is built from
// - the proxy listener (bind address and port)
// - the default log level
//
// API keys are deliberately absent: they arrive with each request.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

pub const CONFIG_API_VERSION: &str = "toolkit.console/v1";
pub const CONFIG_KIND: &str = "ConsoleConfig";
pub const DEFAULT_BACKEND_URL: &str = "https://social-toolkit.ti.trilogy.com";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// API version (must be "toolkit.console/v1")
    #[serde(rename = "apiVersion")]
    pub api_version: String,

    /// Resource kind (must be "ConsoleConfig")
    pub kind: String,

    pub metadata: ConfigMetadata,

    pub spec: ConsoleConfigSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigMetadata {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsoleConfigSpec {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base address of the content-generation backend
    #[serde(default = "default_backend_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// trace, debug, info, warn, error (or any EnvFilter directive)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_version: CONFIG_API_VERSION.to_string(),
            kind: CONFIG_KIND.to_string(),
            metadata: ConfigMetadata {
                name: "toolkit-console".to_string(),
                version: None,
            },
            spec: ConsoleConfigSpec::default(),
        }
    }
}

impl ConsoleConfig {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Discover configuration file using precedence order
    /// 1. TOOLKIT_CONFIG_PATH environment variable
    /// 2. ./toolkit-console.yaml (working directory)
    /// 3. ~/.toolkit/console.yaml (user home)
    /// 4. /etc/toolkit/console.yaml (system, Unix) or C:\ProgramData\Toolkit\console.yaml (Windows)
    pub fn discover_config() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("TOOLKIT_CONFIG_PATH") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        let cwd = PathBuf::from("./toolkit-console.yaml");
        if cwd.exists() {
            return Some(cwd);
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".toolkit").join("console.yaml");
            if user_config.exists() {
                return Some(user_config);
            }
        }

        #[cfg(unix)]
        let system_config = PathBuf::from("/etc/toolkit/console.yaml");
        #[cfg(windows)]
        let system_config = PathBuf::from("C:\\ProgramData\\Toolkit\\console.yaml");

        if system_config.exists() {
            return Some(system_config);
        }

        None
    }

    /// Load configuration with discovery, fallback to default
    pub fn load_or_default(cli_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        // An explicit path must exist and parse
        if let Some(path) = cli_path {
            tracing::info!("Loading configuration from explicit path: {:?}", path);
            let mut config = Self::from_yaml_file(&path)?;
            config.apply_env_overrides();
            return Ok(config);
        }

        let mut config = match Self::discover_config() {
            Some(config_path) => {
                tracing::info!("Loading configuration from discovered path: {:?}", config_path);
                Self::from_yaml_file(config_path)?
            }
            None => {
                tracing::debug!("No configuration file found in standard locations. Using defaults.");
                Self::default()
            }
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Same as [`Self::apply_env_overrides`] with an injectable lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("TOOLKIT_API_BASE_URL").filter(|v| !v.is_empty()) {
            tracing::info!("Environment override: TOOLKIT_API_BASE_URL={}", url);
            self.spec.backend.base_url = url;
        }

        if let Some(addr) = lookup("TOOLKIT_BIND_ADDRESS").filter(|v| !v.is_empty()) {
            self.spec.server.bind_address = addr;
        }

        if let Some(port) = lookup("TOOLKIT_PORT") {
            match port.parse::<u16>() {
                Ok(port) => self.spec.server.port = port,
                Err(_) => {
                    tracing::warn!(
                        "Invalid value for TOOLKIT_PORT: '{}'. Expected a port number. Ignoring.",
                        port
                    );
                }
            }
        }

        if let Some(level) = lookup("TOOLKIT_LOG_LEVEL").filter(|v| !v.is_empty()) {
            self.spec.logging.level = level;
        }
    }

    /// Parsed backend base URL.
    pub fn backend_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.spec.backend.base_url).map_err(|e| {
            ConfigError::Invalid(format!(
                "spec.backend.base_url '{}' is not a valid URL: {}",
                self.spec.backend.base_url, e
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "spec.backend.base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if url.cannot_be_a_base() {
            return Err(ConfigError::Invalid(
                "spec.backend.base_url cannot carry path segments".to_string(),
            ));
        }

        Ok(url)
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.spec.server.bind_address, self.spec.server.port)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_version != CONFIG_API_VERSION {
            return Err(ConfigError::Invalid(format!(
                "Invalid apiVersion: '{}'. Must be '{}'",
                self.api_version, CONFIG_API_VERSION
            )));
        }

        if self.kind != CONFIG_KIND {
            return Err(ConfigError::Invalid(format!(
                "Invalid kind: '{}'. Must be '{}'",
                self.kind, CONFIG_KIND
            )));
        }

        if self.metadata.name.is_empty() {
            return Err(ConfigError::Invalid("metadata.name cannot be empty".to_string()));
        }

        self.backend_url()?;

        if self.spec.server.port == 0 {
            return Err(ConfigError::Invalid("spec.server.port cannot be 0".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ConsoleConfig::default();
        assert_eq!(config.spec.backend.base_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.listen_address(), "127.0.0.1:3000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
apiVersion: toolkit.console/v1
kind: ConsoleConfig
metadata:
  name: staging
spec:
  backend:
    base_url: https://backend.staging.example
"#;
        let config = ConsoleConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.metadata.name, "staging");
        assert_eq!(config.spec.backend.base_url, "https://backend.staging.example");
        assert_eq!(config.spec.server.port, 3000);
        assert_eq!(config.spec.logging.level, "info");
    }

    #[test]
    fn test_load_from_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let yaml = ConsoleConfig::default().to_yaml_string().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = ConsoleConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.kind, CONFIG_KIND);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let result = ConsoleConfig::load_or_default(Some(PathBuf::from(
            "/nonexistent/toolkit-console.yaml",
        )));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("TOOLKIT_API_BASE_URL", "http://localhost:9999"),
            ("TOOLKIT_PORT", "8080"),
            ("TOOLKIT_LOG_LEVEL", "debug"),
        ]);
        let mut config = ConsoleConfig::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.spec.backend.base_url, "http://localhost:9999");
        assert_eq!(config.spec.server.port, 8080);
        assert_eq!(config.spec.server.bind_address, "127.0.0.1");
        assert_eq!(config.spec.logging.level, "debug");
    }

    #[test]
    fn test_invalid_port_override_ignored() {
        let mut config = ConsoleConfig::default();
        config.apply_overrides(|name| (name == "TOOLKIT_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.spec.server.port, 3000);
    }

    #[test]
    fn test_validation() {
        let mut config = ConsoleConfig::default();
        config.api_version = "v0".to_string();
        assert!(config.validate().is_err());

        let mut config = ConsoleConfig::default();
        config.spec.backend.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = ConsoleConfig::default();
        config.spec.backend.base_url = "mailto:ops@example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = ConsoleConfig::default();
        config.spec.server.port = 0;
        assert!(config.validate().is_err());
    }
}
