//! cmdproxy-cli: Command-line client for a CmdProxy server
//!
//! Provides the `cmdproxy-test` binary, which opens console or telnet
//! sessions on a CmdProxy server, runs commands in them and closes them.

pub mod args;
pub mod client;
pub mod commands;
pub mod output;
