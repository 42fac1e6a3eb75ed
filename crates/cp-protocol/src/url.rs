//! Endpoint addressing
//!
//! Every CmdProxy endpoint lives under
//! `http://{host}:{port}/api/{API_VERSION}/{type}/{endpoint}`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::message::API_VERSION;

/// Kind of remote session the server should open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    /// Local console on the server host
    Console,
    /// Telnet session to a target device
    Telnet,
}

impl ConnectionType {
    /// Path segment used in endpoint URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionType::Console => "console",
            ConnectionType::Telnet => "telnet",
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server endpoint addressed by a single HTTP request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Open a session
    Connect,
    /// Run a command in an open session
    Command,
    /// Close a session
    Disconnect,
}

impl Endpoint {
    /// Path segment used in endpoint URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Connect => "connect",
            Endpoint::Command => "command",
            Endpoint::Disconnect => "disconnect",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the URL of an endpoint
///
/// Host and port are used as given; no escaping is applied.
pub fn build_url(host: &str, port: u16, connection: ConnectionType, endpoint: Endpoint) -> String {
    format!(
        "http://{}:{}/api/{}/{}/{}",
        host, port, API_VERSION, connection, endpoint
    )
}
