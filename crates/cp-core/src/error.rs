//! Core error types for the CmdProxy client

use cp_protocol::{Endpoint, ProtocolError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while talking to a CmdProxy server
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection refused, timeout, or any other transport failure
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with something other than 200
    #[error("{endpoint} error. Status: {status}")]
    UnexpectedStatus { endpoint: Endpoint, status: u16 },

    /// Server answered 200 with an unusable body
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// An operation was started without an input it needs
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    /// Invalid configuration
    #[error("Invalid config: {0}")]
    Invalid(String),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
