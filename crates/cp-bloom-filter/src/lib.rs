//! # ChainProbe Bloom Filter
//!
//! The 2048-bit log bloom used by block producers to index event topics,
//! and the probe arithmetic needed to query it.
//!
//! ## Architecture
//!
//! - `probe`: maps an arbitrary byte key to three (byte index, bit mask)
//!   pairs inside the 256-byte filter. Pure function of the key's
//!   keccak-256 digest.
//! - `filter`: the `Bloom` bit array with producer-side `accrue` and
//!   consumer-side membership tests.
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: No false negatives — a key accrued into a filter is
//!   always reported as contained.
//! - **INVARIANT-2**: `probe` is deterministic across calls and processes;
//!   the bloom geometry (2048 bits, 3 bits per key) is fixed by the block
//!   producer and must not be parameterized on the query side.
//!
//! False positives are possible by construction and are resolved against
//! exact receipt data by the harness, not here.

pub mod filter;
pub mod probe;

pub use filter::{Bloom, BLOOM_BYTE_LENGTH};
pub use probe::{probe, BloomProbe, ProbeSlot, PROBE_SLOTS};
