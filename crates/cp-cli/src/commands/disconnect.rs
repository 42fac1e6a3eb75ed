//! Disconnect step

use cp_core::{ClientError, CmdProxyApi};
use cp_protocol::{ConnectionType, SessionId};

use crate::output::{print_error, print_info};

/// Close a session
pub async fn disconnect_step<A>(
    api: &A,
    connection: ConnectionType,
    session_id: &SessionId,
) -> Result<(), ClientError>
where
    A: CmdProxyApi + ?Sized,
{
    print_info(&format!("{}/disconnect", connection));

    match api.disconnect(connection, session_id).await {
        Ok(()) => {
            print_info(&format!(
                "{}/disconnect Success. SessId: {}",
                connection, session_id
            ));
            Ok(())
        }
        Err(e) => {
            print_error(&format!("{}/disconnect failed: {}", connection, e));
            Err(e)
        }
    }
}
