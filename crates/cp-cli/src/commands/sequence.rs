//! The `commandWithConnect` sequence

use cp_core::{ActionOutcome, CmdProxyApi, ConnectionKind};
use cp_protocol::Endpoint;

use super::{command_step, connect_step, disconnect_step};
use crate::output::print_info;

/// Connect, run `command` in the new session, then disconnect it
///
/// Stops at the first failing step. With `disconnect_on_error` a failed
/// command step is followed by a best-effort disconnect; the outcome still
/// names the command step.
pub async fn command_with_connect<A>(
    api: &A,
    kind: &ConnectionKind,
    command: &str,
    command_id: Option<i64>,
    disconnect_on_error: bool,
) -> ActionOutcome
where
    A: CmdProxyApi + ?Sized,
{
    let connection = kind.connection_type();

    let session_id = match connect_step(api, kind).await {
        Ok(id) => id,
        Err(error) => {
            return ActionOutcome::Failed {
                step: Endpoint::Connect,
                error,
            }
        }
    };

    if let Err(error) = command_step(api, connection, &session_id, command, command_id).await {
        if disconnect_on_error {
            print_info(&format!("closing session {} after failed command", session_id));
            if let Err(e) = disconnect_step(api, connection, &session_id).await {
                tracing::warn!("Cleanup disconnect of {} failed: {}", session_id, e);
            }
        }
        return ActionOutcome::Failed {
            step: Endpoint::Command,
            error,
        };
    }

    match disconnect_step(api, connection, &session_id).await {
        Ok(()) => ActionOutcome::Completed,
        Err(error) => ActionOutcome::Failed {
            step: Endpoint::Disconnect,
            error,
        },
    }
}
