//! # Shared Types Crate
//!
//! Domain entities shared across the ChainProbe crates.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: all cross-crate types are defined here.
//! - **Plain data**: no I/O, no async. Views over decoded records live in
//!   `cp-record-codec`; this crate only holds the primitives they share.

pub mod entities;
pub mod keys;

pub use entities::*;
pub use keys::{keccak256, KeyParseError, QueryKeySet, QUERY_KEY_COUNT};
