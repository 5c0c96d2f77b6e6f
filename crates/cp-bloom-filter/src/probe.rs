//! Probe derivation: key bytes to bit positions.
//!
//! The block producer indexes a topic by hashing it with keccak-256 and
//! folding the first six digest bytes into three bit positions. The exact
//! arithmetic below (big-endian 16-bit reads, 11-bit positions, byte index
//! counted from the end of the array) must match the producer bit for bit,
//! otherwise membership tests silently degrade to random answers.

use sha3::{Digest, Keccak256};

use crate::filter::BLOOM_BYTE_LENGTH;

/// Bits set per key.
pub const PROBE_SLOTS: usize = 3;

/// One bit position inside the filter's backing array.
///
/// `byte_index` counts from the start of the array, but the derivation
/// indexes from the end: index 0 is the filter's most-significant byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeSlot {
    pub byte_index: usize,
    pub bit_mask: u8,
}

/// The three positions a key maps to. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BloomProbe {
    slots: [ProbeSlot; PROBE_SLOTS],
}

impl BloomProbe {
    /// The slots in derivation order.
    pub fn slots(&self) -> &[ProbeSlot; PROBE_SLOTS] {
        &self.slots
    }
}

/// Compute the probe for a key.
///
/// For k in {0, 1, 2}, with `h` the keccak-256 digest of the key:
/// the bit position is the big-endian 16-bit value at `h[2k..2k+2]`
/// masked to 11 bits, and the mask selects bit `h[2k+1] & 0x7` within
/// the byte `BLOOM_BYTE_LENGTH - 1 - (position >> 3)`.
pub fn probe(key: &[u8]) -> BloomProbe {
    let digest = Keccak256::digest(key);

    let mut slots = [ProbeSlot {
        byte_index: 0,
        bit_mask: 0,
    }; PROBE_SLOTS];

    for (k, slot) in slots.iter_mut().enumerate() {
        let hi = u16::from_be_bytes([digest[2 * k], digest[2 * k + 1]]);
        let bit_pos = usize::from(hi & 0x7ff);
        *slot = ProbeSlot {
            byte_index: BLOOM_BYTE_LENGTH - 1 - (bit_pos >> 3),
            bit_mask: 1 << (digest[2 * k + 1] & 0x7),
        };
    }

    BloomProbe { slots }
}
