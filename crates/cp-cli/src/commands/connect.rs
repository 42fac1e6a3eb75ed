//! Connect step

use cp_core::{ClientError, CmdProxyApi, ConnectionKind};
use cp_protocol::SessionId;

use crate::output::{print_error, print_info};

/// Open a session and report its id
pub async fn connect_step<A>(api: &A, kind: &ConnectionKind) -> Result<SessionId, ClientError>
where
    A: CmdProxyApi + ?Sized,
{
    print_info(&format!("{}/connect", kind));

    match api.connect(kind).await {
        Ok(session_id) => {
            print_info(&format!("{}/connect Success. SessId: {}", kind, session_id));
            Ok(session_id)
        }
        Err(e) => {
            print_error(&format!("{}/connect failed: {}", kind, e));
            Err(e)
        }
    }
}
