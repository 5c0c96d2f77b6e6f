//! Header view: the log bloom plus content hash.

use cp_bloom_filter::{Bloom, BLOOM_BYTE_LENGTH};
use rlp::{Rlp, RlpStream};
use shared_types::{keccak256, BlockNumber, Hash};

use crate::error::DecodeError;
use crate::expect_list;

/// Decoded header, holding only the fields the scan needs.
///
/// The content hash is the keccak-256 of the raw header RLP, computed at
/// decode time so the view stays immutable afterwards.
#[derive(Debug, Clone)]
pub struct HeaderView {
    number: BlockNumber,
    parent_hash: Hash,
    logs_bloom: Bloom,
    hash: Hash,
}

impl HeaderView {
    pub fn number(&self) -> BlockNumber {
        self.number
    }

    pub fn parent_hash(&self) -> Hash {
        self.parent_hash
    }

    /// The accumulated log bloom set by the block producer. Read-only.
    pub fn logs_bloom(&self) -> &Bloom {
        &self.logs_bloom
    }

    /// keccak-256 of the raw header RLP.
    pub fn hash(&self) -> Hash {
        self.hash
    }
}

/// Decode a raw header payload.
pub fn decode_header(payload: &[u8]) -> Result<HeaderView, DecodeError> {
    if payload.is_empty() {
        return Err(DecodeError::EmptyPayload);
    }

    let rlp = Rlp::new(payload);
    expect_list(&rlp, 3)?;

    let number: BlockNumber = rlp.val_at(0)?;
    let parent_hash: Hash = rlp.val_at(1)?;
    let bloom_bytes: Vec<u8> = rlp.val_at(2)?;
    let logs_bloom = Bloom::from_slice(&bloom_bytes).ok_or(DecodeError::FieldLength {
        field: "logs_bloom",
        expected: BLOOM_BYTE_LENGTH,
        actual: bloom_bytes.len(),
    })?;

    Ok(HeaderView {
        number,
        parent_hash,
        logs_bloom,
        hash: keccak256(payload),
    })
}

/// Encode a header into its wire layout.
pub fn encode_header(number: BlockNumber, parent_hash: Hash, logs_bloom: &Bloom) -> Vec<u8> {
    let mut stream = RlpStream::new_list(3);
    stream.append(&number);
    stream.append(&parent_hash);
    stream.append(&logs_bloom.as_bytes().as_slice());
    stream.out().to_vec()
}
