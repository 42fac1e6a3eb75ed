//! Command-line argument parsing
//!
//! Flag spellings follow the CmdProxy conventions (`--targetHost`,
//! `--loginExpectedString`, ...). Parsed flags are merged with the config
//! file into an immutable [`Invocation`].

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use cp_core::config::ClientConfig;
use cp_core::{Action, ConnectionKind, FailurePolicy};
use cp_protocol::{ConnectTelnetRequest, SessionId};

const USAGE_EXAMPLES: &str = "\
Examples:
  Connect:
    cmdproxy-test --type=console --action=connect

  Command:
    cmdproxy-test --type=console --action=command --command=\"ls -lah\" --id=219602104153538926

  Disconnect:
    cmdproxy-test --type=console --action=disconnect --id=219602104153538926

  Complex use:
    cmdproxy-test --type=console --action=commandWithConnect --command=\"ls -lah\"

  Telnet:
    cmdproxy-test --type=telnet --action=connect --targetHost=10.0.0.1 --targetPort=23 \\
        --targetLogin=admin --targetPassword=secret --loginExpectedString=login: \\
        --passwordExpectedString=Password: --hostnameExpectedString=router#";

/// Simple tool for testing and demonstrating CmdProxy work
#[derive(Parser, Debug)]
#[command(name = "cmdproxy-test")]
#[command(author, version, about = "Simple tool for testing and demonstrating CmdProxy work")]
#[command(after_help = USAGE_EXAMPLES)]
pub struct Cli {
    /// Connection type
    #[arg(long = "type", value_name = "TYPE", value_enum)]
    pub kind: TypeArg,

    /// Action to perform
    #[arg(long, value_enum)]
    pub action: ActionArg,

    /// Host of CmdProxy [default: localhost]
    #[arg(long)]
    pub host: Option<String>,

    /// Port of CmdProxy [default: 25505]
    #[arg(long)]
    pub port: Option<u16>,

    /// Session id returned by an earlier connect
    #[arg(
        long,
        required_if_eq_any([("action", "command"), ("action", "disconnect")])
    )]
    pub id: Option<String>,

    /// Command to execute
    #[arg(
        long,
        required_if_eq_any([("action", "command"), ("action", "commandWithConnect")])
    )]
    pub command: Option<String>,

    /// Correlation id echoed back by the server
    #[arg(long = "command-id")]
    pub command_id: Option<i64>,

    /// Telnet target host [default: localhost]
    #[arg(long = "targetHost", alias = "telnetHost")]
    pub target_host: Option<String>,

    /// Telnet target port [default: 23]
    #[arg(long = "targetPort", alias = "telnetPort")]
    pub target_port: Option<u16>,

    /// Telnet login
    #[arg(long = "targetLogin", alias = "login")]
    pub target_login: Option<String>,

    /// Telnet password
    #[arg(long = "targetPassword", alias = "password")]
    pub target_password: Option<String>,

    /// Prompt preceding the login
    #[arg(long = "loginExpectedString")]
    pub login_expected_string: Option<String>,

    /// Prompt preceding the password
    #[arg(long = "passwordExpectedString")]
    pub password_expected_string: Option<String>,

    /// Device prompt once logged in
    #[arg(long = "hostnameExpectedString")]
    pub hostname_expected_string: Option<String>,

    /// Pagination marker in long outputs
    #[arg(long = "continueCommandExpectedString")]
    pub continue_command_expected_string: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// How a failed commandWithConnect is surfaced [default: report]
    #[arg(long = "on-failure", value_enum)]
    pub on_failure: Option<FailurePolicyArg>,

    /// Disconnect the session if the command step of commandWithConnect fails
    #[arg(long = "disconnect-on-error")]
    pub disconnect_on_error: bool,

    /// Path to configuration file
    #[arg(short, long, env = "CMDPROXY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all diagnostics except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// `--type` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeArg {
    Console,
    Telnet,
}

/// `--action` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActionArg {
    Connect,
    Disconnect,
    Command,
    #[value(name = "commandWithConnect")]
    CommandWithConnect,
}

impl From<ActionArg> for Action {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::Connect => Action::Connect,
            ActionArg::Disconnect => Action::Disconnect,
            ActionArg::Command => Action::Command,
            ActionArg::CommandWithConnect => Action::CommandWithConnect,
        }
    }
}

/// `--on-failure` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FailurePolicyArg {
    Report,
    Silent,
}

impl From<FailurePolicyArg> for FailurePolicy {
    fn from(arg: FailurePolicyArg) -> Self {
        match arg {
            FailurePolicyArg::Report => FailurePolicy::Report,
            FailurePolicyArg::Silent => FailurePolicy::Silent,
        }
    }
}

/// Everything one run needs, after flags and config file are merged
#[derive(Debug, Clone)]
pub struct Invocation {
    pub kind: ConnectionKind,
    pub action: Action,
    pub host: String,
    pub port: u16,
    pub timeout: Option<Duration>,
    pub session_id: Option<SessionId>,
    pub command: Option<String>,
    pub command_id: Option<i64>,
    pub failure_policy: FailurePolicy,
    pub disconnect_on_error: bool,
}

impl Invocation {
    /// Merge parsed flags over the loaded configuration
    pub fn resolve(cli: &Cli, config: &ClientConfig) -> Self {
        let kind = match cli.kind {
            TypeArg::Console => ConnectionKind::Console,
            TypeArg::Telnet => ConnectionKind::Telnet(telnet_request(cli, config)),
        };

        Self {
            kind,
            action: cli.action.into(),
            host: cli
                .host
                .clone()
                .unwrap_or_else(|| config.server.host.clone()),
            port: cli.port.unwrap_or(config.server.port),
            timeout: cli
                .timeout
                .map(Duration::from_secs)
                .or_else(|| config.server.timeout()),
            session_id: cli.id.clone().map(SessionId::from),
            command: cli.command.clone(),
            command_id: cli.command_id,
            failure_policy: cli
                .on_failure
                .map(FailurePolicy::from)
                .unwrap_or(config.behavior.on_sequence_failure),
            disconnect_on_error: cli.disconnect_on_error || config.behavior.disconnect_on_error,
        }
    }
}

fn telnet_request(cli: &Cli, config: &ClientConfig) -> ConnectTelnetRequest {
    let telnet = &config.telnet;
    let pick = |flag: &Option<String>, fallback: &String| {
        flag.clone().unwrap_or_else(|| fallback.clone())
    };

    ConnectTelnetRequest {
        host: pick(&cli.target_host, &telnet.host),
        port: cli.target_port.unwrap_or(telnet.port),
        login: pick(&cli.target_login, &telnet.login),
        password: pick(&cli.target_password, &telnet.password),
        login_expected_string: pick(&cli.login_expected_string, &telnet.login_expected_string),
        password_expected_string: pick(
            &cli.password_expected_string,
            &telnet.password_expected_string,
        ),
        hostname_expected_string: pick(
            &cli.hostname_expected_string,
            &telnet.hostname_expected_string,
        ),
        continue_command_expected_string: pick(
            &cli.continue_command_expected_string,
            &telnet.continue_command_expected_string,
        ),
    }
}
