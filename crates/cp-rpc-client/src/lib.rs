//! # ChainProbe RPC Client
//!
//! Minimal JSON-RPC 2.0 client for the debug methods that serve raw block
//! data: `debug_getRawHeader`, `debug_getRawBlock`, `debug_getRawReceipts`.
//!
//! Every payload arrives as a `0x`-prefixed hex string; the client strips
//! the prefix and returns decoded bytes. Transport failures, missing
//! `result` fields, and malformed hex are all fatal for the call — there
//! is no retry layer, by design: a failed call invalidates the throughput
//! measurement it was part of.

pub mod client;
pub mod error;
pub mod types;

pub use client::{decode_hex_payload, RpcClient};
pub use error::RpcError;
pub use types::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
