//! Protocol error types

use thiserror::Error;

/// Errors that can occur while decoding server responses
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Body is not the JSON document we expected
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A field the client relies on is absent or empty
    #[error("Response is missing field `{0}`")]
    MissingField(&'static str),
}
