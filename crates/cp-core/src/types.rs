//! Core domain types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ClientError;
use cp_protocol::{CommandResponse, ConnectTelnetRequest, ConnectionType, Endpoint};

/// Kind of session to open, carrying what its connect request needs
///
/// Console sessions need nothing; telnet sessions carry the target device
/// and its prompt markers. Command and disconnect behave the same for both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionKind {
    /// Console on the server host
    Console,
    /// Telnet session to a target device
    Telnet(ConnectTelnetRequest),
}

impl ConnectionKind {
    /// Wire-level connection type
    pub fn connection_type(&self) -> ConnectionType {
        match self {
            ConnectionKind::Console => ConnectionType::Console,
            ConnectionKind::Telnet(_) => ConnectionType::Telnet,
        }
    }
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.connection_type())
    }
}

/// What a single invocation asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Open a session and print its id
    Connect,
    /// Close the session given on the command line
    Disconnect,
    /// Run a command in the session given on the command line
    Command,
    /// Connect, run the command, disconnect
    CommandWithConnect,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Connect => write!(f, "connect"),
            Action::Disconnect => write!(f, "disconnect"),
            Action::Command => write!(f, "command"),
            Action::CommandWithConnect => write!(f, "commandWithConnect"),
        }
    }
}

/// How a failed `commandWithConnect` sequence is surfaced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Print the failed step and exit non-zero
    #[default]
    Report,
    /// Log at debug level only and exit zero
    Silent,
}

/// Successful command exchange
#[derive(Debug, Clone)]
pub struct CommandReply {
    /// Decoded body
    pub response: CommandResponse,
    /// Body exactly as received
    pub raw: String,
}

/// Result of running an action to completion or to its first failure
#[derive(Debug)]
pub enum ActionOutcome {
    /// Every step succeeded
    Completed,
    /// A step failed; later steps were not attempted
    Failed {
        /// Endpoint whose request failed
        step: Endpoint,
        /// Why it failed
        error: ClientError,
    },
}

impl ActionOutcome {
    /// Whether every step succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, ActionOutcome::Completed)
    }

    /// Process exit code for this outcome
    ///
    /// Only the composite action honors [`FailurePolicy::Silent`]; a failed
    /// bare action always exits 1.
    pub fn exit_code(&self, action: Action, policy: FailurePolicy) -> i32 {
        match self {
            ActionOutcome::Completed => 0,
            ActionOutcome::Failed { .. }
                if action == Action::CommandWithConnect && policy == FailurePolicy::Silent =>
            {
                0
            }
            ActionOutcome::Failed { .. } => 1,
        }
    }
}
