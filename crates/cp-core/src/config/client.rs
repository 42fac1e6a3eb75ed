//! Client configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::types::FailurePolicy;

/// Default CmdProxy host
pub const DEFAULT_HOST: &str = "localhost";

/// Default CmdProxy port
pub const DEFAULT_PORT: u16 = 25505;

/// Default telnet port on the target device
pub const DEFAULT_TELNET_PORT: u16 = 23;

/// Settings read from `config.toml`
///
/// Every field has a default, so an empty file is a valid configuration.
/// Command-line flags take precedence over anything set here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Where the CmdProxy server listens
    pub server: ServerConfig,

    /// Defaults for telnet connect requests
    pub telnet: TelnetConfig,

    /// Failure handling
    pub behavior: BehaviorConfig,
}

/// CmdProxy server address and request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Per-request timeout in seconds; unset means wait indefinitely
    pub timeout: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout: None,
        }
    }
}

impl ServerConfig {
    /// Timeout as a duration, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// Target device and prompt markers for telnet sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelnetConfig {
    pub host: String,
    pub port: u16,
    pub login: String,
    pub password: String,
    pub login_expected_string: String,
    pub password_expected_string: String,
    pub hostname_expected_string: String,
    pub continue_command_expected_string: String,
}

impl Default for TelnetConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_TELNET_PORT,
            login: String::new(),
            password: String::new(),
            login_expected_string: String::new(),
            password_expected_string: String::new(),
            hostname_expected_string: String::new(),
            continue_command_expected_string: String::new(),
        }
    }
}

/// Failure handling for the composite action
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// How a failed `commandWithConnect` is surfaced
    pub on_sequence_failure: FailurePolicy,

    /// Close the session when the command step fails after connecting
    pub disconnect_on_error: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.server.port, 25505);
        assert!(config.server.timeout().is_none());
        assert_eq!(config.telnet.host, "localhost");
        assert_eq!(config.telnet.port, 23);
        assert_eq!(config.behavior.on_sequence_failure, FailurePolicy::Report);
    }

    #[test]
    fn test_telnet_section() {
        let config: ClientConfig = toml::from_str(
            r#"
[telnet]
host = "10.0.0.1"
login = "admin"
hostname_expected_string = "router#"
"#,
        )
        .unwrap();
        assert_eq!(config.telnet.host, "10.0.0.1");
        assert_eq!(config.telnet.port, 23);
        assert_eq!(config.telnet.login, "admin");
        assert_eq!(config.telnet.hostname_expected_string, "router#");
        assert!(config.telnet.password.is_empty());
    }

    #[test]
    fn test_timeout_conversion() {
        let server = ServerConfig {
            timeout: Some(30),
            ..ServerConfig::default()
        };
        assert_eq!(server.timeout(), Some(Duration::from_secs(30)));
    }
}
