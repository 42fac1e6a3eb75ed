//! Operation contract of a CmdProxy server

use async_trait::async_trait;

use crate::error::ClientError;
use crate::types::{CommandReply, ConnectionKind};
use cp_protocol::{CommandRequest, ConnectionType, SessionId};

/// The three operations a CmdProxy server exposes per connection type
///
/// Implementations return an error for transport failures and for any
/// status other than 200. Callers decide what a failure means for the
/// surrounding action.
#[async_trait]
pub trait CmdProxyApi: Send + Sync {
    /// Open a session and return the token the server issued for it
    async fn connect(&self, kind: &ConnectionKind) -> Result<SessionId, ClientError>;

    /// Run a command inside an open session
    async fn command(
        &self,
        connection: ConnectionType,
        request: &CommandRequest,
    ) -> Result<CommandReply, ClientError>;

    /// Close a session
    async fn disconnect(
        &self,
        connection: ConnectionType,
        session_id: &SessionId,
    ) -> Result<(), ClientError>;
}
