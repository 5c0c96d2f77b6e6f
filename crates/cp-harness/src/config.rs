//! Scan configuration.

use serde::{Deserialize, Serialize};
use shared_types::QueryKeySet;

use crate::verify::Strictness;

/// What to do when a block's declared hash disagrees with its header.
///
/// The mismatch is always counted in the stage report; the policy only
/// decides whether the run continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IntegrityPolicy {
    /// Log at warn level and keep processing the block.
    #[default]
    Warn,
    /// Abandon the rest of the block's processing, keep the batch going.
    Skip,
    /// Fail the whole batch.
    Abort,
}

/// Per-run configuration for the scan pipelines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// The three keys probed against blooms and verified against topics.
    pub keys: QueryKeySet,
    /// Receipt verification mode.
    pub strictness: Strictness,
    /// Integrity mismatch handling.
    pub integrity_policy: IntegrityPolicy,
}

impl ScanConfig {
    /// Configuration with default strictness and integrity policy.
    pub fn new(keys: QueryKeySet) -> Self {
        Self {
            keys,
            strictness: Strictness::default(),
            integrity_policy: IntegrityPolicy::default(),
        }
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn with_integrity_policy(mut self, policy: IntegrityPolicy) -> Self {
        self.integrity_policy = policy;
        self
    }
}
