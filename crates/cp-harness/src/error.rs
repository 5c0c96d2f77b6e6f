//! Error types for the benchmark harness.

use cp_record_codec::{DecodeError, IntegrityMismatch};
use thiserror::Error;

/// Failure at the fetch boundary, as seen through the
/// [`crate::ports::RawBlockSource`] port.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Query protocol failure: {0}")]
    Protocol(String),

    #[error("Malformed payload: {0}")]
    Payload(String),
}

/// Errors that abort a benchmark batch.
///
/// There is no recovery path: a single failed call invalidates the
/// throughput measurement for the whole run.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("Integrity mismatch aborted the batch: {0}")]
    Integrity(IntegrityMismatch),
}
