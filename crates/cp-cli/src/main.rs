//! CmdProxy test client
//!
//! Opens console or telnet sessions on a CmdProxy server, runs commands in
//! them and closes them, one action per invocation:
//! - connect / disconnect / command on an explicit session
//! - commandWithConnect for the whole round trip

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cmdproxy_cli::args::{Cli, Invocation};
use cmdproxy_cli::client::HttpClient;
use cmdproxy_cli::commands::{report_outcome, run_action};
use cp_core::config::load_client_config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = load_client_config(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load config from {:?}", path),
        None => "Failed to load default config".to_string(),
    })?;

    let invocation = Invocation::resolve(&cli, &config);
    tracing::debug!(
        action = %invocation.action,
        kind = %invocation.kind,
        host = %invocation.host,
        port = invocation.port,
        "Resolved invocation"
    );

    let client = HttpClient::new(&invocation.host, invocation.port, invocation.timeout)
        .context("Failed to build HTTP client")?;

    let outcome = run_action(&client, &invocation).await;
    let code = report_outcome(&outcome, invocation.action, invocation.failure_policy);
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
