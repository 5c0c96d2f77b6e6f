//! Receipt verification: resolving bloom ambiguity by exact comparison.
//!
//! A bloom hit only means "the three probe bit triples are all set" — the
//! bits may have been set by unrelated topics. Verification re-reads the
//! block's receipts and compares log topics byte for byte.

use cp_record_codec::{LogEntry, ReceiptView};
use serde::{Deserialize, Serialize};
use shared_types::{QueryKeySet, Topic, QUERY_KEY_COUNT};

/// Outcome of resolving a bloom hit against exact receipt data.
///
/// A false positive is a normal result of the probabilistic test, not a
/// failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    TruePositive,
    FalsePositive,
}

/// How much of each receipt's log list to scan.
///
/// The producer convention puts the signature topic in the first log of
/// the emitting receipt, so `FirstLogOnly` is the default. The wider
/// modes exist for producers that do not follow the convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Strictness {
    /// Compare only the first log entry of each receipt.
    #[default]
    FirstLogOnly,
    /// Compare every log entry of each receipt.
    AnyLogInReceipt,
    /// Compare every log entry across the block's receipts. Coincides
    /// with `AnyLogInReceipt` because classification already spans all
    /// receipts of one block; kept as a distinct name for configuration.
    AnyLogInBlock,
}

/// Classify a bloom hit against the block's receipts.
///
/// Receipts are scanned in order and the scan stops at the first match.
/// A log matches when its topic count equals the key count and every
/// topic equals the corresponding key byte for byte.
pub fn classify(
    receipts: &[ReceiptView],
    keys: &QueryKeySet,
    strictness: Strictness,
) -> Classification {
    let expected = keys.as_topics();

    let matched = match strictness {
        Strictness::FirstLogOnly => receipts
            .iter()
            .any(|receipt| receipt.logs.first().is_some_and(|log| topics_match(log, &expected))),
        Strictness::AnyLogInReceipt | Strictness::AnyLogInBlock => receipts
            .iter()
            .any(|receipt| receipt.logs.iter().any(|log| topics_match(log, &expected))),
    };

    if matched {
        Classification::TruePositive
    } else {
        Classification::FalsePositive
    }
}

fn topics_match(log: &LogEntry, expected: &[Topic; QUERY_KEY_COUNT]) -> bool {
    log.topics.len() == expected.len()
        && log.topics.iter().zip(expected.iter()).all(|(topic, key)| topic == key)
}
