//! cp-core: Core abstractions and configuration for the CmdProxy test client
//!
//! This crate provides the connection kinds, the operation contract every
//! CmdProxy client implements, action outcomes, error types, and the
//! on-disk configuration.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use error::{ClientError, ConfigError};
pub use traits::CmdProxyApi;
pub use types::{Action, ActionOutcome, CommandReply, ConnectionKind, FailurePolicy};
