//! The HTTP client for the raw block-data debug methods.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::Client;
use shared_types::{block_number_hex, BlockNumber};
use tracing::debug;

use crate::error::RpcError;
use crate::types::{JsonRpcRequest, JsonRpcResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// JSON-RPC client for one endpoint.
pub struct RpcClient {
    client: Client,
    endpoint: String,
    request_id: AtomicU64,
}

impl RpcClient {
    /// Create a client for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, RpcError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(RpcError::Http)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            request_id: AtomicU64::new(1),
        })
    }

    /// The endpoint this client talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn next_id(&self) -> u64 {
        self.request_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Call a JSON-RPC method and unwrap its `result` field.
    async fn call<P, R>(&self, method: &str, params: P) -> Result<R, RpcError>
    where
        P: serde::Serialize,
        R: serde::de::DeserializeOwned,
    {
        let request = JsonRpcRequest::new(method, params, self.next_id());
        debug!(method, id = request.id, "issuing JSON-RPC request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    RpcError::Connection(format!("cannot connect to {}", self.endpoint))
                } else {
                    RpcError::Http(e)
                }
            })?;

        let rpc_response: JsonRpcResponse<R> = response.json().await?;

        if let Some(error) = rpc_response.error {
            return Err(RpcError::Rpc(error.to_string()));
        }

        rpc_response.result.ok_or_else(|| RpcError::MissingResult {
            method: method.to_string(),
        })
    }

    /// Fetch and hex-decode the raw header RLP for a block.
    pub async fn raw_header(&self, number: BlockNumber) -> Result<Vec<u8>, RpcError> {
        let payload: String = self
            .call("debug_getRawHeader", [block_number_hex(number)])
            .await?;
        decode_hex_payload(&payload)
    }

    /// Fetch and hex-decode the raw block RLP for a block.
    pub async fn raw_block(&self, number: BlockNumber) -> Result<Vec<u8>, RpcError> {
        let payload: String = self
            .call("debug_getRawBlock", [block_number_hex(number)])
            .await?;
        decode_hex_payload(&payload)
    }

    /// Fetch and hex-decode every receipt payload of a block, in order.
    pub async fn raw_receipts(&self, number: BlockNumber) -> Result<Vec<Vec<u8>>, RpcError> {
        let payloads: Vec<String> = self
            .call("debug_getRawReceipts", [block_number_hex(number)])
            .await?;
        payloads
            .iter()
            .map(|payload| decode_hex_payload(payload))
            .collect()
    }
}

/// Decode a `0x`-prefixed hex payload string into bytes.
///
/// The prefix is mandatory: a bare hex string is treated as malformed,
/// matching the node-side convention.
pub fn decode_hex_payload(payload: &str) -> Result<Vec<u8>, RpcError> {
    let stripped = payload
        .strip_prefix("0x")
        .ok_or_else(|| RpcError::InvalidPayload(format!("missing 0x prefix: {payload:.16}")))?;
    hex::decode(stripped).map_err(|e| RpcError::InvalidPayload(e.to_string()))
}
