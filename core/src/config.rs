//! Configuration management

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Daemon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server information
    pub server: ServerConfig,
    /// Listener settings
    pub listen: ListenConfig,
    /// Channel settings
    pub channels: ChannelsConfig,
}

/// Server-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server name
    pub name: String,
    /// Server description
    pub description: String,
    /// Version string reported by the info operation
    pub version: String,
}

/// Listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListenConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
}

/// Channel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelsConfig {
    /// Channels created at startup with the keep flag set; these
    /// survive with zero members
    pub keep: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "rustchatd.local".to_string(),
                description: "A presence and messaging directory".to_string(),
                version: format!("v{}", env!("CARGO_PKG_VERSION")),
            },
            listen: ListenConfig {
                host: "127.0.0.1".to_string(),
                port: 8081,
            },
            channels: ChannelsConfig { keep: Vec::new() },
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
        Ok(config)
    }

    /// Write configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.name.is_empty() {
            return Err(Error::Config("Server name cannot be empty".to_string()));
        }
        if self.listen.port == 0 {
            return Err(Error::Config("Listen port cannot be 0".to_string()));
        }
        let mut seen = HashSet::new();
        for name in &self.channels.keep {
            if name.is_empty() {
                return Err(Error::Config(
                    "Keep channel name cannot be empty".to_string(),
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(Error::Config(format!(
                    "Duplicate keep channel: {}",
                    name
                )));
            }
        }
        Ok(())
    }
}
