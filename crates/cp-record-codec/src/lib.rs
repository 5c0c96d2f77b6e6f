//! # ChainProbe Record Codec
//!
//! RLP wire views over the raw payloads returned by a node's debug RPC
//! surface. Only the fields the scan pipeline needs are decoded: content
//! hashes, the header's log bloom, and receipt log topics.
//!
//! ## Wire layout
//!
//! - Header: `[number: u64, parent_hash: 32B, logs_bloom: 256B]`;
//!   the header's content hash is the keccak-256 of its raw RLP.
//! - Block: `[declared_hash: 32B, header, tx_count: u32]`; the producer
//!   declares the keccak-256 of the embedded header RLP. Disagreement
//!   between the declared and recomputed hash is an integrity fault,
//!   surfaced as a value for the caller's policy to handle.
//! - Receipt: `[status: u8, logs]`, log: `[topics: [32B], data]`.
//!
//! Every decoder fails with a [`DecodeError`] when the payload's shape or
//! field lengths disagree with this layout. Encoders exist for the same
//! records so synthetic fixtures round-trip through the identical path.

pub mod block;
pub mod error;
pub mod header;
pub mod receipt;

pub use block::{decode_block, encode_block, encode_block_with_declared_hash, BlockView, IntegrityMismatch};
pub use error::DecodeError;
pub use header::{decode_header, encode_header, HeaderView};
pub use receipt::{decode_receipt, decode_receipt_list, encode_receipt, LogEntry, ReceiptView};

/// Validate that an RLP item is a list with exactly `expected` items.
pub(crate) fn expect_list(rlp: &rlp::Rlp<'_>, expected: usize) -> Result<(), DecodeError> {
    if !rlp.is_list() {
        return Err(DecodeError::Rlp(rlp::DecoderError::RlpExpectedToBeList));
    }
    let actual = rlp.item_count()?;
    if actual != expected {
        return Err(DecodeError::ItemCount { expected, actual });
    }
    Ok(())
}
