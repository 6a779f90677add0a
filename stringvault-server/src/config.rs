// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Stringvault Server Configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: HttpServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpServerConfig {
    /// HTTP API listen address (e.g., "127.0.0.1:8080")
    #[serde(default = "default_http_addr")]
    pub listen_addr: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Enable CORS
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,

    /// Allowed CORS origins (empty = allow all)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_http_addr(),
            request_timeout_secs: default_request_timeout(),
            enable_cors: default_enable_cors(),
            cors_origins: vec![],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Emit JSON log lines instead of the human-readable format
    #[serde(default)]
    pub json: bool,
}

// Default values
fn default_http_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_enable_cors() -> bool {
    true
}

impl ServerConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration with priority: env > file > defaults
    ///
    /// Supported environment variables:
    /// - STRINGVAULT_HTTP_ADDR: HTTP listen address (default: 127.0.0.1:8080)
    /// - STRINGVAULT_REQUEST_TIMEOUT: Request timeout in seconds (default: 30)
    /// - STRINGVAULT_ENABLE_CORS: Enable CORS (default: true)
    /// - STRINGVAULT_CORS_ORIGINS: Comma-separated allowed origins
    /// - STRINGVAULT_LOG_JSON: Emit JSON logs (default: false)
    ///
    /// Nothing is logged here since tracing is configured from the result;
    /// call [`ConfigReport::log`] once the subscriber is installed.
    pub fn load(config_file: Option<PathBuf>) -> Result<(Self, ConfigReport)> {
        let (config, source) = match config_file {
            Some(path) if path.exists() => (Self::from_file(&path)?, ConfigSource::File(path)),
            Some(path) => (Self::default(), ConfigSource::Missing(path)),
            None => (Self::default(), ConfigSource::Defaults),
        };

        let mut ignored_env = Vec::new();
        let config = config.merge_with_env(|key| std::env::var(key).ok(), &mut ignored_env);

        Ok((
            config,
            ConfigReport {
                source,
                ignored_env,
            },
        ))
    }

    /// Apply environment overrides; only variables that are set take effect.
    /// Malformed values keep the current setting and are recorded in `ignored`.
    fn merge_with_env(
        mut self,
        var: impl Fn(&str) -> Option<String>,
        ignored: &mut Vec<String>,
    ) -> Self {
        if let Some(addr) = var("STRINGVAULT_HTTP_ADDR") {
            self.server.listen_addr = addr;
        }

        if let Some(secs) = parse_env(&var, "STRINGVAULT_REQUEST_TIMEOUT", ignored) {
            self.server.request_timeout_secs = secs;
        }

        if let Some(enabled) = parse_env(&var, "STRINGVAULT_ENABLE_CORS", ignored) {
            self.server.enable_cors = enabled;
        }

        if let Some(origins) = var("STRINGVAULT_CORS_ORIGINS") {
            self.server.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(json) = parse_env(&var, "STRINGVAULT_LOG_JSON", ignored) {
            self.logging.json = json;
        }

        self
    }

    /// Parse listen address as SocketAddr
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(self.server.listen_addr.parse()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;

        if self.server.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }

        Ok(())
    }
}

/// Where `ServerConfig::load` took its values from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Missing(PathBuf),
    Defaults,
}

/// What happened while loading, reported after tracing is installed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigReport {
    pub source: ConfigSource,
    /// Environment overrides that failed to parse, as `KEY="value"`
    pub ignored_env: Vec<String>,
}

impl ConfigReport {
    pub fn log(&self) {
        match &self.source {
            ConfigSource::File(path) => {
                tracing::info!("Loaded configuration from file: {:?}", path)
            }
            ConfigSource::Missing(path) => {
                tracing::warn!("Config file not found: {:?}, using defaults", path)
            }
            ConfigSource::Defaults => tracing::info!("No config file given, using defaults"),
        }

        for entry in &self.ignored_env {
            tracing::warn!("Ignoring invalid environment override {}", entry);
        }
    }
}

fn parse_env<T: FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    key: &str,
    ignored: &mut Vec<String>,
) -> Option<T> {
    let raw = var(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            ignored.push(format!("{}={:?}", key, raw));
            None
        }
    }
}
