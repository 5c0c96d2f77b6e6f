//! Decode errors for the record codec.

use thiserror::Error;

/// Payload shape or length disagrees with the expected wire layout.
///
/// Decode failures are fatal for the batch they occur in: the harness
/// aborts the run rather than reporting throughput over partial data.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("RLP decoding failed: {0}")]
    Rlp(#[from] rlp::DecoderError),

    #[error("Unexpected RLP item count: expected {expected}, got {actual}")]
    ItemCount { expected: usize, actual: usize },

    #[error("Wrong length for {field}: expected {expected} bytes, got {actual}")]
    FieldLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Empty payload")]
    EmptyPayload,
}
