//! # Core Domain Entities
//!
//! Primitive types shared by the codec, the bloom filter, and the harness.

use serde::{Deserialize, Serialize};

// Re-export H256 from primitive-types for use across all crates
pub use primitive_types::H256;

/// A 32-byte keccak-256 hash.
pub type Hash = H256;

/// A 32-byte log topic. By convention topic 0 is the event-signature hash
/// and subsequent topics are the indexed event arguments.
pub type Topic = H256;

/// Block height in the chain.
pub type BlockNumber = u64;

/// A contiguous half-open range of block numbers, produced lazily.
///
/// Replaces an up-front materialized list of identifiers: for large spans
/// only the cursor and the bound are held in memory. Consumed once per
/// benchmark run; construct a fresh range to restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRange {
    next: BlockNumber,
    end: BlockNumber,
}

impl BlockRange {
    /// Create a range over `[start, end)`. An empty range is allowed.
    pub fn new(start: BlockNumber, end: BlockNumber) -> Self {
        Self { next: start, end }
    }

    /// Number of block numbers remaining in the range.
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.next)
    }

    /// True if no block numbers remain.
    pub fn is_empty(&self) -> bool {
        self.next >= self.end
    }
}

impl Iterator for BlockRange {
    type Item = BlockNumber;

    fn next(&mut self) -> Option<BlockNumber> {
        if self.next >= self.end {
            return None;
        }
        let number = self.next;
        self.next += 1;
        Some(number)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len() as usize;
        (remaining, Some(remaining))
    }
}

/// Serialize a block number for the JSON-RPC boundary.
///
/// Lowercase, `0x`-prefixed, no leading zeros beyond a single digit
/// (`0` becomes `"0x0"`).
pub fn block_number_hex(number: BlockNumber) -> String {
    format!("{:#x}", number)
}
