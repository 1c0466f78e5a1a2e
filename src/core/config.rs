//! Configuration management for the dice MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::transport::TransportConfig;
use crate::domains::dice::DEFAULT_CAPACITY;

/// Main configuration structure for the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Roll history configuration.
    pub history: HistoryConfig,

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

/// Configuration for the roll history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of rolls kept before the oldest is evicted.
    pub capacity: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "dice-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            history: HistoryConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `DICE_MCP_`.
    /// For example: `DICE_MCP_SERVER_NAME`, `DICE_MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("DICE_MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("DICE_MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(capacity) = std::env::var("DICE_MCP_HISTORY_CAPACITY") {
            match capacity.parse::<usize>() {
                Ok(capacity) if capacity > 0 => config.history.capacity = capacity,
                _ => warn!(
                    "Ignoring invalid DICE_MCP_HISTORY_CAPACITY '{}': expected a positive integer",
                    capacity
                ),
            }
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_history_capacity() {
        let config = Config::default();
        assert_eq!(config.history.capacity, 100);
    }

    #[test]
    fn test_history_capacity_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("DICE_MCP_HISTORY_CAPACITY", "250");
        }
        let config = Config::from_env();
        assert_eq!(config.history.capacity, 250);
        unsafe {
            std::env::remove_var("DICE_MCP_HISTORY_CAPACITY");
        }
    }

    #[test]
    fn test_invalid_history_capacity_falls_back() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("DICE_MCP_HISTORY_CAPACITY", "not-a-number");
        }
        let config = Config::from_env();
        assert_eq!(config.history.capacity, 100);
        unsafe {
            std::env::remove_var("DICE_MCP_HISTORY_CAPACITY");
        }
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("DICE_MCP_SERVER_NAME", "my-dice");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "my-dice");
        unsafe {
            std::env::remove_var("DICE_MCP_SERVER_NAME");
        }
    }
}
