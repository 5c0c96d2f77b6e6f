//! Throughput accounting.

use std::time::Duration;

use serde::Serialize;

use crate::runner::Stage;

/// Items per second over a wall-clock span, computed the way the
/// historical harness did: `count / elapsed_ms * 1000`.
///
/// An empty batch or a sub-millisecond span reports 0.0 rather than
/// dividing by zero.
pub fn items_per_second(items: u64, elapsed: Duration) -> f64 {
    let millis = elapsed.as_millis();
    if items == 0 || millis == 0 {
        return 0.0;
    }
    items as f64 / millis as f64 * 1000.0
}

/// Counters for one pipeline run over one block range.
#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    pub stage: Stage,
    /// Blocks processed.
    pub items: u64,
    /// Wall-clock span of the whole sequence, not a sum of per-item times.
    pub elapsed: Duration,
    /// Bloom membership tests that passed for all three keys.
    pub bloom_hits: u64,
    /// Bloom hits confirmed by exact receipt topics.
    pub true_positives: u64,
    /// Bloom hits refuted by exact receipt topics.
    pub false_positives: u64,
    /// Declared-hash mismatches observed (counted under every policy).
    pub integrity_mismatches: u64,
}

impl StageReport {
    pub(crate) fn new(stage: Stage) -> Self {
        Self {
            stage,
            items: 0,
            elapsed: Duration::ZERO,
            bloom_hits: 0,
            true_positives: 0,
            false_positives: 0,
            integrity_mismatches: 0,
        }
    }

    /// Items per second for this run.
    pub fn items_per_second(&self) -> f64 {
        items_per_second(self.items, self.elapsed)
    }
}

impl std::fmt::Display for StageReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {:.1} items/s ({} items in {} ms",
            self.stage.name(),
            self.items_per_second(),
            self.items,
            self.elapsed.as_millis(),
        )?;
        if self.bloom_hits > 0 {
            write!(
                f,
                ", {} bloom hits, {} confirmed, {} false positives",
                self.bloom_hits, self.true_positives, self.false_positives
            )?;
        }
        if self.integrity_mismatches > 0 {
            write!(f, ", {} integrity mismatches", self.integrity_mismatches)?;
        }
        write!(f, ")")
    }
}
