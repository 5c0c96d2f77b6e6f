//! Driven port: where raw block data comes from.

use async_trait::async_trait;
use shared_types::BlockNumber;

use crate::error::FetchError;

/// Source of raw, already hex-decoded block payloads.
///
/// The production adapter talks JSON-RPC over HTTP; tests provide
/// in-memory fixtures. The fetch is the only suspension point in a
/// benchmark iteration.
#[async_trait]
pub trait RawBlockSource: Send + Sync {
    /// Raw header RLP for one block.
    async fn raw_header(&self, number: BlockNumber) -> Result<Vec<u8>, FetchError>;

    /// Raw block RLP for one block.
    async fn raw_block(&self, number: BlockNumber) -> Result<Vec<u8>, FetchError>;

    /// Raw receipt RLP payloads for one block, in receipt order.
    async fn raw_receipts(&self, number: BlockNumber) -> Result<Vec<Vec<u8>>, FetchError>;
}
