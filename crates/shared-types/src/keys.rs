//! # Query Key Set
//!
//! The three keys a scan looks for in a block's log index: the
//! event-signature hash plus two indexed arguments (session id and nonce).
//! The same keys are used as bloom probe inputs and as the expected topics
//! during receipt verification, so the set length is pinned to three.

use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use thiserror::Error;

use crate::entities::{Hash, Topic};

/// Number of keys in a query set, and the number of topics a log entry
/// must carry to be considered a match.
pub const QUERY_KEY_COUNT: usize = 3;

/// Errors raised while building a key set from user-supplied hex.
#[derive(Debug, Error)]
pub enum KeyParseError {
    #[error("Invalid hex in {field}: {source}")]
    InvalidHex {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Wrong length for {field}: expected 32 bytes, got {len}")]
    WrongLength { field: &'static str, len: usize },
}

/// Exactly three 32-byte keys, in topic order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryKeySet {
    /// keccak-256 of the event signature string (topic 0).
    pub event_signature: Hash,
    /// First indexed argument (topic 1).
    pub session_id: Hash,
    /// Second indexed argument (topic 2).
    pub nonce: Hash,
}

impl QueryKeySet {
    /// Build a key set from an ABI event signature string and two
    /// already-parsed 32-byte arguments.
    pub fn from_signature(signature: &str, session_id: Hash, nonce: Hash) -> Self {
        Self {
            event_signature: keccak256(signature.as_bytes()),
            session_id,
            nonce,
        }
    }

    /// Build a key set from hex-encoded arguments (with or without a
    /// `0x` prefix), as supplied on the command line.
    pub fn from_hex_args(
        signature: &str,
        session_id_hex: &str,
        nonce_hex: &str,
    ) -> Result<Self, KeyParseError> {
        Ok(Self::from_signature(
            signature,
            parse_hash("session_id", session_id_hex)?,
            parse_hash("nonce", nonce_hex)?,
        ))
    }

    /// The keys in topic order.
    pub fn as_topics(&self) -> [Topic; QUERY_KEY_COUNT] {
        [self.event_signature, self.session_id, self.nonce]
    }

    /// The keys as byte slices, in the order they are probed against the
    /// bloom filter.
    pub fn as_probe_inputs(&self) -> [&[u8]; QUERY_KEY_COUNT] {
        [
            self.event_signature.as_bytes(),
            self.session_id.as_bytes(),
            self.nonce.as_bytes(),
        ]
    }
}

/// keccak-256 convenience wrapper.
pub fn keccak256(data: &[u8]) -> Hash {
    let digest = Keccak256::digest(data);
    Hash::from_slice(&digest)
}

fn parse_hash(field: &'static str, hex_str: &str) -> Result<Hash, KeyParseError> {
    let stripped = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    let bytes = hex::decode(stripped).map_err(|source| KeyParseError::InvalidHex { field, source })?;
    if bytes.len() != 32 {
        return Err(KeyParseError::WrongLength {
            field,
            len: bytes.len(),
        });
    }
    Ok(Hash::from_slice(&bytes))
}
