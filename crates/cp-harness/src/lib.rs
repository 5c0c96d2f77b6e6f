//! # ChainProbe Harness
//!
//! Drives a block-number range through one of four pipelines and reports
//! items processed per second:
//!
//! - `HeaderFetch`: raw header retrieval only.
//! - `BlockFetchAndHashCheck`: raw block retrieval, decode, and the
//!   declared-hash integrity check.
//! - `HeaderBloomProbe`: header retrieval, decode, and the three-key
//!   bloom membership test.
//! - `BloomThenReceiptVerify`: the bloom probe, plus receipt retrieval
//!   and exact topic verification for every filter hit.
//!
//! ## Architecture
//!
//! Ports & adapters: the harness depends on the [`ports::RawBlockSource`]
//! trait, not on a concrete transport. `adapters` wires the trait to the
//! JSON-RPC client; tests substitute in-memory fixture sources.
//!
//! Execution is strictly sequential — one block is fully processed before
//! the next fetch is issued — and timing wraps the whole sequence, so the
//! reported figure is total items over total wall-clock span. Fatal
//! errors (transport, decode) abort the batch immediately with no partial
//! report.

pub mod adapters;
pub mod config;
pub mod error;
pub mod ports;
pub mod runner;
pub mod throughput;
pub mod verify;

pub use config::{IntegrityPolicy, ScanConfig};
pub use error::{BenchError, FetchError};
pub use ports::RawBlockSource;
pub use runner::{Stage, ThroughputHarness};
pub use throughput::{items_per_second, StageReport};
pub use verify::{classify, Classification, Strictness};
