//! Request and response bodies for the CmdProxy API
//!
//! All bodies are JSON. Field names follow the server's spelling exactly:
//! the session token travels as `sessionid`, telnet parameters in camelCase.
//!
//! # Exchange
//!
//! 1. `connect`: console sends a bare GET, telnet POSTs a [`ConnectTelnetRequest`].
//!    The server answers with a [`ConnectResponse`].
//! 2. `command`: POST a [`CommandRequest`], the server answers with a
//!    [`CommandResponse`] echoing the request plus the command output.
//! 3. `disconnect`: GET with `?sessionid=...`, only the status code matters.

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;
use crate::session::SessionId;

/// API version segment of every endpoint path
pub const API_VERSION: &str = "v1.0";

/// Key carrying the session token in bodies and query strings
pub const SESSIONID_PARAM: &str = "sessionid";

/// Key carrying the command text in command bodies
pub const COMMAND_PARAM: &str = "command";

/// Body of `POST /telnet/connect`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectTelnetRequest {
    /// Target device host
    pub host: String,
    /// Target device port
    pub port: u16,
    /// Login sent at the login prompt
    pub login: String,
    /// Password sent at the password prompt
    pub password: String,
    /// Marker the server waits for before sending the login
    pub login_expected_string: String,
    /// Marker the server waits for before sending the password
    pub password_expected_string: String,
    /// Marker identifying the device prompt once logged in
    pub hostname_expected_string: String,
    /// Pagination marker the server answers to keep output flowing
    pub continue_command_expected_string: String,
}

impl ConnectTelnetRequest {
    /// Names of the fields the server refuses to connect without
    ///
    /// The pagination marker is optional on the server side and is never
    /// reported here.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.host.is_empty() {
            missing.push("host");
        }
        if self.port == 0 {
            missing.push("port");
        }
        if self.login.is_empty() {
            missing.push("login");
        }
        if self.password.is_empty() {
            missing.push("password");
        }
        if self.login_expected_string.is_empty() {
            missing.push("loginExpectedString");
        }
        if self.password_expected_string.is_empty() {
            missing.push("passwordExpectedString");
        }
        if self.hostname_expected_string.is_empty() {
            missing.push("hostnameExpectedString");
        }
        missing
    }
}

/// Body of a successful connect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectResponse {
    #[serde(rename = "sessionid")]
    pub session_id: SessionId,
}

impl ConnectResponse {
    /// Decode a connect body, insisting on a non-empty session id
    pub fn from_body(body: &str) -> Result<Self, ProtocolError> {
        let raw: RawSessionBody = serde_json::from_str(body)?;
        Ok(Self {
            session_id: raw.require_session_id()?,
        })
    }
}

/// Body of `POST /{type}/command`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    #[serde(rename = "sessionid")]
    pub session_id: SessionId,
    /// Caller-chosen correlation id, echoed back by the server
    #[serde(rename = "commandid", default, skip_serializing_if = "Option::is_none")]
    pub command_id: Option<i64>,
    pub command: String,
}

/// Body of a successful command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    #[serde(rename = "sessionid")]
    pub session_id: SessionId,
    #[serde(rename = "commandid", default, skip_serializing_if = "Option::is_none")]
    pub command_id: Option<i64>,
    #[serde(default)]
    pub command: String,
    /// Captured output of the command
    #[serde(default)]
    pub output: String,
}

impl CommandResponse {
    /// Decode a command body, insisting on a non-empty session id
    pub fn from_body(body: &str) -> Result<Self, ProtocolError> {
        let raw: RawCommandBody = serde_json::from_str(body)?;
        let session_id = raw.session.require_session_id()?;
        Ok(Self {
            session_id,
            command_id: raw.command_id,
            command: raw.command.unwrap_or_default(),
            output: raw.output.unwrap_or_default(),
        })
    }
}

/// Lenient view of a body used for presence checks
#[derive(Deserialize)]
struct RawSessionBody {
    #[serde(rename = "sessionid", default)]
    session_id: Option<SessionId>,
}

impl RawSessionBody {
    fn require_session_id(self) -> Result<SessionId, ProtocolError> {
        match self.session_id {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(ProtocolError::MissingField(SESSIONID_PARAM)),
        }
    }
}

#[derive(Deserialize)]
struct RawCommandBody {
    #[serde(flatten)]
    session: RawSessionBody,
    #[serde(rename = "commandid", default)]
    command_id: Option<i64>,
    #[serde(default)]
    command: Option<String>,
    #[serde(default)]
    output: Option<String>,
}
