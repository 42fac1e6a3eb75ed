//! Action dispatch
//!
//! Maps the requested action onto the connect / command / disconnect steps.
//! Every step prints its own report lines; the dispatcher only turns step
//! results into an [`ActionOutcome`].

mod command;
mod connect;
mod disconnect;
mod sequence;

pub use command::command_step;
pub use connect::connect_step;
pub use disconnect::disconnect_step;
pub use sequence::command_with_connect;

use cp_core::{Action, ActionOutcome, ClientError, CmdProxyApi, FailurePolicy};
use cp_protocol::Endpoint;

use crate::args::Invocation;
use crate::output::{print_error, print_info};

/// Run the invocation's action against `api`
pub async fn run_action<A>(api: &A, invocation: &Invocation) -> ActionOutcome
where
    A: CmdProxyApi + ?Sized,
{
    let kind = &invocation.kind;
    let connection = kind.connection_type();
    print_info(&format!("handle {}", connection));

    match invocation.action {
        Action::Connect => step_outcome(Endpoint::Connect, connect_step(api, kind).await),

        Action::Disconnect => {
            let Some(session_id) = &invocation.session_id else {
                return missing_argument(Endpoint::Disconnect, "--id");
            };
            step_outcome(
                Endpoint::Disconnect,
                disconnect_step(api, connection, session_id).await,
            )
        }

        Action::Command => {
            let Some(session_id) = &invocation.session_id else {
                return missing_argument(Endpoint::Command, "--id");
            };
            let Some(command) = &invocation.command else {
                return missing_argument(Endpoint::Command, "--command");
            };
            step_outcome(
                Endpoint::Command,
                command_step(api, connection, session_id, command, invocation.command_id).await,
            )
        }

        Action::CommandWithConnect => {
            let Some(command) = &invocation.command else {
                return missing_argument(Endpoint::Command, "--command");
            };
            command_with_connect(
                api,
                kind,
                command,
                invocation.command_id,
                invocation.disconnect_on_error,
            )
            .await
        }
    }
}

/// Surface a finished action and pick the process exit code
pub fn report_outcome(outcome: &ActionOutcome, action: Action, policy: FailurePolicy) -> i32 {
    let code = outcome.exit_code(action, policy);

    if let ActionOutcome::Failed { step, error } = outcome {
        if code == 0 {
            tracing::debug!("{} failed at {}, ignored by policy: {}", action, step, error);
        } else if action == Action::CommandWithConnect {
            print_error(&format!("{} stopped at {}: {}", action, step, error));
        }
    }

    code
}

fn step_outcome<T>(step: Endpoint, result: Result<T, ClientError>) -> ActionOutcome {
    match result {
        Ok(_) => ActionOutcome::Completed,
        Err(error) => ActionOutcome::Failed { step, error },
    }
}

fn missing_argument(step: Endpoint, argument: &'static str) -> ActionOutcome {
    let error = ClientError::MissingArgument(argument);
    print_error(&error.to_string());
    ActionOutcome::Failed { step, error }
}
