//! Configuration System
//!
//! Loads configuration from a TOML file and environment variables. The
//! browser build never reads this; it uses the compiled-in defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::contacts::ClientConfig;
use crate::dev_server::DevServerConfig;
use crate::environment::{Endpoints, Location};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoints: Endpoints,

    #[serde(default)]
    pub client: ClientSettings,

    #[serde(default)]
    pub dev_server: DevServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Contacts client settings
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Page hostname the origin is resolved for
    #[serde(default = "default_hostname")]
    pub hostname: String,

    /// Page port the origin is resolved for (empty for the default port)
    #[serde(default)]
    pub port: String,

    /// Skip resolution and always use this origin
    pub api_url: Option<String>,
}

fn default_request_timeout() -> u64 {
    30
}

fn default_hostname() -> String {
    "localhost".to_string()
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout(),
            hostname: default_hostname(),
            port: String::new(),
            api_url: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// The first existing file wins. A file that exists but cannot be read
    /// or parsed is an error rather than a silent fallback to defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_first(&default_paths())
    }

    /// Load the first of `paths` that exists, or the environment alone
    pub fn load_first(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => Self::load_with_env(path),
            None => Self::from_env(),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `GENEALINA_*` overrides from `lookup`
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(origin) = lookup("GENEALINA_LOCAL_ORIGIN") {
            self.endpoints.local_origin = origin;
        }
        if let Some(origin) = lookup("GENEALINA_PRODUCTION_ORIGIN") {
            self.endpoints.production_origin = origin;
        }

        if let Some(url) = lookup("GENEALINA_API_URL") {
            self.client.api_url = Some(url);
        }

        if let Some(host) = lookup("GENEALINA_DEV_HOST") {
            self.dev_server.host = host;
        }
        if let Some(port) = lookup("GENEALINA_DEV_PORT") {
            self.dev_server.port = port.parse().map_err(|_| ConfigError::Env {
                var: "GENEALINA_DEV_PORT",
                value: port,
            })?;
        }

        if let Some(level) = lookup("GENEALINA_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("GENEALINA_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }

    /// Contacts client configuration for these settings
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoints: self.endpoints.clone(),
            location: Location::new(&self.client.hostname, &self.client.port),
            origin_override: self.client.api_url.clone(),
            request_timeout: Duration::from_secs(self.client.request_timeout_secs),
        }
    }
}

fn default_paths() -> Vec<PathBuf> {
    [
        dirs::config_dir().map(|p| p.join("genealina").join("config.toml")),
        Some(PathBuf::from("/etc/genealina/config.toml")),
        Some(PathBuf::from("./config.toml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value {value:?} for {var}")]
    Env { var: &'static str, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Genealina Configuration
#
# Environment variables override these settings:
# - GENEALINA_LOCAL_ORIGIN
# - GENEALINA_PRODUCTION_ORIGIN
# - GENEALINA_API_URL
# - GENEALINA_DEV_HOST
# - GENEALINA_DEV_PORT
# - GENEALINA_LOG_LEVEL
# - GENEALINA_LOG_FORMAT

[endpoints]
# Backend used when the page is served locally
local_origin = "http://localhost:3001"

# Backend used everywhere else
production_origin = "https://your-genealina-backend.herokuapp.com"

# Hostnames treated as local ("" is a page opened from disk)
local_hosts = ["localhost", "127.0.0.1", ""]

# Static dev server ports treated as local on any hostname
dev_ports = ["3000", "5500", "5501"]

[client]
# Request timeout in seconds
request_timeout_secs = 30

# Page location the backend origin is resolved for
hostname = "localhost"
port = ""

# Always use this backend, skipping resolution
# api_url = "http://localhost:3001"

[dev_server]
# Development backend address
host = "127.0.0.1"
port = 3001

# Start with a few demo submissions
seed_demo = true

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
