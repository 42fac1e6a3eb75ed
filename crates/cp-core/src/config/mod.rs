//! Configuration management for the CmdProxy client

mod client;

pub use client::{BehaviorConfig, ClientConfig, ServerConfig, TelnetConfig};

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Default configuration file: `<config dir>/cmdproxy/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cmdproxy")
        .join("config.toml")
}

/// Load configuration from a file
pub fn load_config<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Invalid(format!("Failed to read config: {}", e)))?;

    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Resolve the client configuration for this run
///
/// An explicitly requested file must exist and parse. The default file is
/// optional: when it is absent or broken the built-in defaults apply.
pub fn load_client_config(explicit: Option<&Path>) -> Result<ClientConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let default_path = default_config_path();
    if !default_path.exists() {
        tracing::debug!("No config file at {:?}, using defaults", default_path);
        return Ok(ClientConfig::default());
    }

    Ok(load_config(&default_path).unwrap_or_else(|e| {
        tracing::warn!("Failed to load config from {:?}: {}", default_path, e);
        ClientConfig::default()
    }))
}
