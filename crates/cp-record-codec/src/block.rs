//! Block view: declared hash versus recomputed header hash.

use rlp::{Rlp, RlpStream};
use shared_types::{keccak256, BlockNumber, Hash};

use crate::error::DecodeError;
use crate::expect_list;
use crate::header::{decode_header, HeaderView};

/// Disagreement between a block's declared hash and the keccak-256 of its
/// embedded header. Indicates corruption in transit or a producer fault.
///
/// This is a value, not an error: the harness decides per its configured
/// policy whether to warn, skip, or abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrityMismatch {
    pub number: BlockNumber,
    pub declared: Hash,
    pub computed: Hash,
}

impl std::fmt::Display for IntegrityMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "block {} declared hash {:?} disagrees with header hash {:?}",
            self.number, self.declared, self.computed
        )
    }
}

/// Decoded block: the producer-declared hash plus the embedded header.
#[derive(Debug, Clone)]
pub struct BlockView {
    hash: Hash,
    header: HeaderView,
    tx_count: u32,
}

impl BlockView {
    /// The hash the producer declared for this block.
    pub fn hash(&self) -> Hash {
        self.hash
    }

    pub fn header(&self) -> &HeaderView {
        &self.header
    }

    pub fn tx_count(&self) -> u32 {
        self.tx_count
    }

    /// Compare the declared hash against the recomputed header hash.
    pub fn integrity_check(&self) -> Result<(), IntegrityMismatch> {
        if self.hash == self.header.hash() {
            Ok(())
        } else {
            Err(IntegrityMismatch {
                number: self.header.number(),
                declared: self.hash,
                computed: self.header.hash(),
            })
        }
    }
}

/// Decode a raw block payload.
///
/// The embedded header is decoded from its own raw RLP slice so that the
/// recomputed content hash covers exactly the bytes the producer hashed.
pub fn decode_block(payload: &[u8]) -> Result<BlockView, DecodeError> {
    if payload.is_empty() {
        return Err(DecodeError::EmptyPayload);
    }

    let rlp = Rlp::new(payload);
    expect_list(&rlp, 3)?;

    let hash: Hash = rlp.val_at(0)?;
    let header = decode_header(rlp.at(1)?.as_raw())?;
    let tx_count: u32 = rlp.val_at(2)?;

    Ok(BlockView {
        hash,
        header,
        tx_count,
    })
}

/// Encode a block around an already-encoded header, declaring the correct
/// hash for it.
pub fn encode_block(header_payload: &[u8], tx_count: u32) -> Vec<u8> {
    encode_block_with_declared_hash(keccak256(header_payload), header_payload, tx_count)
}

/// Encode a block with an arbitrary declared hash. Exists so corruption
/// scenarios can be constructed deliberately in tests.
pub fn encode_block_with_declared_hash(
    declared: Hash,
    header_payload: &[u8],
    tx_count: u32,
) -> Vec<u8> {
    let mut stream = RlpStream::new_list(3);
    stream.append(&declared);
    stream.append_raw(header_payload, 1);
    stream.append(&tx_count);
    stream.out().to_vec()
}
