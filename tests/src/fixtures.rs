//! Synthetic chain fixtures: encoded blocks served from memory.

use std::collections::HashMap;

use async_trait::async_trait;
use cp_bloom_filter::Bloom;
use cp_harness::{FetchError, RawBlockSource};
use cp_record_codec::{
    encode_block, encode_block_with_declared_hash, encode_header, encode_receipt, LogEntry,
    ReceiptView,
};
use shared_types::{keccak256, BlockNumber, Hash, QueryKeySet};

/// In-memory block source built from encoded fixtures.
#[derive(Default)]
pub struct FixtureChain {
    headers: HashMap<BlockNumber, Vec<u8>>,
    blocks: HashMap<BlockNumber, Vec<u8>>,
    receipts: HashMap<BlockNumber, Vec<Vec<u8>>>,
}

impl FixtureChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block whose bloom accrues `accrued` and whose receipts are
    /// as given. The declared block hash is honest.
    pub fn add_block(
        &mut self,
        number: BlockNumber,
        accrued: &[&[u8]],
        receipts: &[ReceiptView],
    ) -> &mut Self {
        let mut bloom = Bloom::default();
        for key in accrued {
            bloom.accrue(key);
        }
        let header = encode_header(number, parent_of(number), &bloom);
        self.blocks
            .insert(number, encode_block(&header, receipts.len() as u32));
        self.headers.insert(number, header);
        self.receipts
            .insert(number, receipts.iter().map(encode_receipt).collect());
        self
    }

    /// Add an empty block (no accrued topics, no receipts).
    pub fn add_empty_block(&mut self, number: BlockNumber) -> &mut Self {
        self.add_block(number, &[], &[])
    }

    /// Add a block whose declared hash has one byte flipped.
    pub fn add_corrupted_block(&mut self, number: BlockNumber) -> &mut Self {
        let header = encode_header(number, parent_of(number), &Bloom::default());
        let mut declared = keccak256(&header);
        declared.as_bytes_mut()[0] ^= 0x01;
        self.blocks
            .insert(number, encode_block_with_declared_hash(declared, &header, 0));
        self.headers.insert(number, header);
        self.receipts.insert(number, vec![]);
        self
    }
}

fn parent_of(number: BlockNumber) -> Hash {
    keccak256(&number.to_be_bytes())
}

#[async_trait]
impl RawBlockSource for FixtureChain {
    async fn raw_header(&self, number: BlockNumber) -> Result<Vec<u8>, FetchError> {
        self.headers
            .get(&number)
            .cloned()
            .ok_or_else(|| FetchError::Protocol(format!("no header for block {number}")))
    }

    async fn raw_block(&self, number: BlockNumber) -> Result<Vec<u8>, FetchError> {
        self.blocks
            .get(&number)
            .cloned()
            .ok_or_else(|| FetchError::Protocol(format!("no block {number}")))
    }

    async fn raw_receipts(&self, number: BlockNumber) -> Result<Vec<Vec<u8>>, FetchError> {
        self.receipts
            .get(&number)
            .cloned()
            .ok_or_else(|| FetchError::Protocol(format!("no receipts for block {number}")))
    }
}

/// The key set used throughout the historical measurements.
pub fn sync_msg_keys() -> QueryKeySet {
    QueryKeySet::from_hex_args(
        "SyncMsg(bytes16,bytes32)",
        "52fdfc072182654f163f5f0f9a621d7200000000000000000000000000000000",
        "9566c74d10037c4d7bbb0407d1e2c64981855ad8681d0d86d1e91e00167939cb",
    )
    .expect("historical key vectors are valid hex")
}

/// A receipt whose first log carries exactly the key set's topics.
pub fn matching_receipt(keys: &QueryKeySet) -> ReceiptView {
    ReceiptView {
        status: 1,
        logs: vec![LogEntry {
            topics: keys.as_topics().to_vec(),
            data: vec![],
        }],
    }
}

/// A receipt whose first log has the right signature and session id but a
/// wrong nonce.
pub fn wrong_nonce_receipt(keys: &QueryKeySet) -> ReceiptView {
    let mut topics = keys.as_topics().to_vec();
    topics[2] = keccak256(b"a different nonce entirely");
    ReceiptView {
        status: 1,
        logs: vec![LogEntry {
            topics,
            data: vec![],
        }],
    }
}
