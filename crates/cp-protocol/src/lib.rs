//! cp-protocol: Wire model for the CmdProxy HTTP API
//!
//! This crate defines the endpoints, request bodies and response bodies
//! exchanged with a CmdProxy server, plus the URL template used to reach them.

pub mod error;
pub mod message;
pub mod session;
pub mod url;

pub use error::ProtocolError;
pub use message::{
    CommandRequest, CommandResponse, ConnectResponse, ConnectTelnetRequest, API_VERSION,
    COMMAND_PARAM, SESSIONID_PARAM,
};
pub use session::SessionId;
pub use url::{build_url, ConnectionType, Endpoint};
