//! The fixed-size bloom bit array.
//!
//! Producer side accrues topics; the query side only reads. Both go
//! through the same probe derivation, which is what makes the
//! no-false-negative guarantee hold.

use crate::probe::{probe, BloomProbe};

/// Filter size in bytes (2048 bits).
pub const BLOOM_BYTE_LENGTH: usize = 256;

/// A 2048-bit log bloom. Index 0 is the most-significant byte.
#[derive(Clone, PartialEq, Eq)]
pub struct Bloom([u8; BLOOM_BYTE_LENGTH]);

impl Default for Bloom {
    fn default() -> Self {
        Self([0u8; BLOOM_BYTE_LENGTH])
    }
}

impl std::fmt::Debug for Bloom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bloom({} bits set)", self.bits_set())
    }
}

impl Bloom {
    /// Wrap an exact 256-byte slice; `None` on any other length.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let array: [u8; BLOOM_BYTE_LENGTH] = bytes.try_into().ok()?;
        Some(Self(array))
    }

    /// The raw backing bytes.
    pub fn as_bytes(&self) -> &[u8; BLOOM_BYTE_LENGTH] {
        &self.0
    }

    /// Number of bits set across the whole filter.
    pub fn bits_set(&self) -> usize {
        self.0.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// True if no bit is set.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Producer-side insertion: set the key's three probe bits.
    ///
    /// After accrual, `contains(key)` is guaranteed to return true.
    pub fn accrue(&mut self, key: &[u8]) {
        for slot in probe(key).slots() {
            self.0[slot.byte_index] |= slot.bit_mask;
        }
    }

    /// Test a precomputed probe: all three bits must be set.
    pub fn contains_probe(&self, probe: &BloomProbe) -> bool {
        probe
            .slots()
            .iter()
            .all(|slot| self.0[slot.byte_index] & slot.bit_mask != 0)
    }

    /// Test a single key.
    ///
    /// `false` means the key is definitely absent; `true` means it may be
    /// present (false positives are possible and must be resolved against
    /// exact data).
    pub fn contains(&self, key: &[u8]) -> bool {
        self.contains_probe(&probe(key))
    }

    /// Test several keys with AND semantics, short-circuiting on the
    /// first key whose bits are not all set.
    pub fn contains_all<'a, I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        keys.into_iter().all(|key| self.contains(key))
    }
}
