//! Receipt view: ordered log entries with their topics.

use rlp::{Decodable, DecoderError, Encodable, Rlp, RlpStream};
use shared_types::Topic;

use crate::error::DecodeError;
use crate::expect_list;

/// One log record: ordered topics plus opaque payload data.
///
/// Topic 0 conventionally holds the event-signature hash; topics 1.. hold
/// the indexed event arguments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogEntry {
    pub topics: Vec<Topic>,
    pub data: Vec<u8>,
}

impl Encodable for LogEntry {
    fn rlp_append(&self, stream: &mut RlpStream) {
        stream.begin_list(2);
        stream.append_list(&self.topics);
        stream.append(&self.data);
    }
}

impl Decodable for LogEntry {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        if !rlp.is_list() {
            return Err(DecoderError::RlpExpectedToBeList);
        }
        if rlp.item_count()? != 2 {
            return Err(DecoderError::RlpIncorrectListLen);
        }
        Ok(Self {
            topics: rlp.list_at(0)?,
            data: rlp.val_at(1)?,
        })
    }
}

/// Decoded receipt: an ordered sequence of logs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReceiptView {
    pub status: u8,
    pub logs: Vec<LogEntry>,
}

/// Decode a single raw receipt payload.
pub fn decode_receipt(payload: &[u8]) -> Result<ReceiptView, DecodeError> {
    if payload.is_empty() {
        return Err(DecodeError::EmptyPayload);
    }

    let rlp = Rlp::new(payload);
    expect_list(&rlp, 2)?;

    Ok(ReceiptView {
        status: rlp.val_at(0)?,
        logs: rlp.list_at(1)?,
    })
}

/// Decode the full receipt list of one block, in order. The first
/// malformed payload fails the whole list.
pub fn decode_receipt_list(payloads: &[Vec<u8>]) -> Result<Vec<ReceiptView>, DecodeError> {
    payloads
        .iter()
        .map(|payload| decode_receipt(payload))
        .collect()
}

/// Encode a receipt into its wire layout.
pub fn encode_receipt(receipt: &ReceiptView) -> Vec<u8> {
    let mut stream = RlpStream::new_list(2);
    stream.append(&receipt.status);
    stream.append_list(&receipt.logs);
    stream.out().to_vec()
}
