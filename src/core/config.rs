//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated
//! once at startup from a `.env` file and environment variables.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Environment variable holding the controller's `host:port`.
pub const CONTROLLER_ADDR_VAR: &str = "CONTROLLER_BIND_ADDR";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// The external controller service.
    pub controller: ControllerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Location of the controller REST API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// `host:port`, or a full URL with scheme.
    pub bind_addr: String,
}

impl ControllerConfig {
    pub fn new(bind_addr: impl Into<String>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
        }
    }

    /// Base URL every API path is appended to.
    pub fn base_url(&self) -> String {
        let addr = self.bind_addr.trim().trim_end_matches('/');
        if addr.starts_with("http://") || addr.starts_with("https://") {
            addr.to_string()
        } else {
            format!("http://{addr}")
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "maudeview-watchlist-manager".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Create a configuration for the given controller address, with
    /// defaults everywhere else.
    pub fn new(controller_addr: impl Into<String>) -> Self {
        Self {
            server: ServerConfig::default(),
            controller: ControllerConfig::new(controller_addr),
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
        }
    }

    /// Load configuration from `.env` and environment variables.
    ///
    /// `CONTROLLER_BIND_ADDR` is required. Optional variables are prefixed
    /// with `MCP_`, for example `MCP_SERVER_NAME` and `MCP_LOG_LEVEL`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let addr = std::env::var(CONTROLLER_ADDR_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| Error::config(format!("{CONTROLLER_ADDR_VAR} must be set")))?;

        let mut config = Self::new(addr);

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        Ok(config)
    }
}
