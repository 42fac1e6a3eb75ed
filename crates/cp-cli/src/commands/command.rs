//! Command step

use cp_core::{ClientError, CmdProxyApi, CommandReply};
use cp_protocol::{CommandRequest, ConnectionType, SessionId};

use crate::output::{print_error, print_info};

/// Run a command in an open session and print the raw reply
pub async fn command_step<A>(
    api: &A,
    connection: ConnectionType,
    session_id: &SessionId,
    command: &str,
    command_id: Option<i64>,
) -> Result<CommandReply, ClientError>
where
    A: CmdProxyApi + ?Sized,
{
    print_info(&format!("{}/command", connection));
    print_info(&format!("exec command: \"{}\"", command));

    let request = CommandRequest {
        session_id: session_id.clone(),
        command_id,
        command: command.to_string(),
    };

    match api.command(connection, &request).await {
        Ok(reply) => {
            print_info(&format!(
                "{}/command Success. SessId: {}",
                connection, reply.response.session_id
            ));
            print_info(&format!("raw output: {}", reply.raw));
            Ok(reply)
        }
        Err(e) => {
            print_error(&format!("{}/command failed: {}", connection, e));
            Err(e)
        }
    }
}
