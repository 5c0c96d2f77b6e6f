//! Errors for the JSON-RPC client.

use thiserror::Error;

/// Errors that can occur when talking to the query endpoint.
///
/// All variants are fatal for the call that produced them.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("JSON-RPC error: {0}")]
    Rpc(String),

    #[error("Missing result in response for {method}")]
    MissingResult { method: String },

    #[error("Malformed hex payload: {0}")]
    InvalidPayload(String),
}
