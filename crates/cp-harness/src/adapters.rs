//! Adapters wiring the fetch port to concrete transports.

use async_trait::async_trait;
use cp_rpc_client::{RpcClient, RpcError};
use shared_types::BlockNumber;

use crate::error::FetchError;
use crate::ports::RawBlockSource;

impl From<RpcError> for FetchError {
    fn from(error: RpcError) -> Self {
        match error {
            RpcError::Http(e) => FetchError::Transport(e.to_string()),
            RpcError::Connection(msg) => FetchError::Transport(msg),
            RpcError::Rpc(msg) => FetchError::Protocol(msg),
            RpcError::MissingResult { method } => {
                FetchError::Protocol(format!("missing result for {method}"))
            }
            RpcError::InvalidPayload(msg) => FetchError::Payload(msg),
        }
    }
}

#[async_trait]
impl RawBlockSource for RpcClient {
    async fn raw_header(&self, number: BlockNumber) -> Result<Vec<u8>, FetchError> {
        Ok(RpcClient::raw_header(self, number).await?)
    }

    async fn raw_block(&self, number: BlockNumber) -> Result<Vec<u8>, FetchError> {
        Ok(RpcClient::raw_block(self, number).await?)
    }

    async fn raw_receipts(&self, number: BlockNumber) -> Result<Vec<Vec<u8>>, FetchError> {
        Ok(RpcClient::raw_receipts(self, number).await?)
    }
}
