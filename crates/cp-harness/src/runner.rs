//! The benchmark driver: one range, one pipeline, one report.

use std::time::Instant;

use cp_record_codec::{decode_block, decode_header, decode_receipt_list};
use serde::{Deserialize, Serialize};
use shared_types::{BlockNumber, BlockRange};
use tracing::{debug, info, warn};

use crate::config::{IntegrityPolicy, ScanConfig};
use crate::error::BenchError;
use crate::ports::RawBlockSource;
use crate::throughput::StageReport;
use crate::verify::{classify, Classification};

/// The four measured pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Fetch the raw header, nothing more.
    HeaderFetch,
    /// Fetch and decode the block, check declared hash against header hash.
    BlockFetchAndHashCheck,
    /// Fetch and decode the header, test the three keys against its bloom.
    HeaderBloomProbe,
    /// The bloom probe plus receipt verification for every hit.
    BloomThenReceiptVerify,
}

impl Stage {
    /// All stages, in the order the historical harness ran them.
    pub const ALL: [Stage; 4] = [
        Stage::HeaderFetch,
        Stage::BlockFetchAndHashCheck,
        Stage::HeaderBloomProbe,
        Stage::BloomThenReceiptVerify,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::HeaderFetch => "header fetch",
            Stage::BlockFetchAndHashCheck => "block fetch + hash check",
            Stage::HeaderBloomProbe => "header bloom probe",
            Stage::BloomThenReceiptVerify => "bloom + receipt verify",
        }
    }
}

/// Sequential benchmark driver over a [`RawBlockSource`].
pub struct ThroughputHarness<S> {
    source: S,
    config: ScanConfig,
}

impl<S: RawBlockSource> ThroughputHarness<S> {
    pub fn new(source: S, config: ScanConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Run one pipeline over a block range.
    ///
    /// Timing wraps the full sequence; each block is fully processed
    /// before the next fetch is issued. Fatal errors abort immediately —
    /// no partial report is returned.
    pub async fn run(&self, blocks: BlockRange, stage: Stage) -> Result<StageReport, BenchError> {
        let mut report = StageReport::new(stage);
        let started = Instant::now();

        for number in blocks {
            match stage {
                Stage::HeaderFetch => self.header_fetch(number).await?,
                Stage::BlockFetchAndHashCheck => self.block_hash_check(number, &mut report).await?,
                Stage::HeaderBloomProbe => {
                    self.bloom_probe(number, &mut report).await?;
                }
                Stage::BloomThenReceiptVerify => self.bloom_then_verify(number, &mut report).await?,
            }
            report.items += 1;
        }

        report.elapsed = started.elapsed();
        info!(stage = stage.name(), items = report.items, "stage complete");
        Ok(report)
    }

    /// Run every pipeline over the same range, in the historical order.
    pub async fn run_all(&self, blocks: BlockRange) -> Result<Vec<StageReport>, BenchError> {
        let mut reports = Vec::with_capacity(Stage::ALL.len());
        for stage in Stage::ALL {
            reports.push(self.run(blocks, stage).await?);
        }
        Ok(reports)
    }

    async fn header_fetch(&self, number: BlockNumber) -> Result<(), BenchError> {
        let payload = self.source.raw_header(number).await?;
        if payload.is_empty() {
            warn!(number, "empty header payload");
        }
        Ok(())
    }

    async fn block_hash_check(
        &self,
        number: BlockNumber,
        report: &mut StageReport,
    ) -> Result<(), BenchError> {
        let payload = self.source.raw_block(number).await?;
        let block = decode_block(&payload)?;

        if let Err(mismatch) = block.integrity_check() {
            report.integrity_mismatches += 1;
            match self.config.integrity_policy {
                IntegrityPolicy::Warn => warn!(%mismatch, "block integrity mismatch"),
                IntegrityPolicy::Skip => debug!(%mismatch, "skipping block after mismatch"),
                IntegrityPolicy::Abort => return Err(BenchError::Integrity(mismatch)),
            }
        }
        Ok(())
    }

    async fn bloom_probe(
        &self,
        number: BlockNumber,
        report: &mut StageReport,
    ) -> Result<bool, BenchError> {
        let payload = self.source.raw_header(number).await?;
        let header = decode_header(&payload)?;

        let hit = header
            .logs_bloom()
            .contains_all(self.config.keys.as_probe_inputs());
        if hit {
            report.bloom_hits += 1;
            debug!(number, "all three keys present in header bloom");
        }
        Ok(hit)
    }

    async fn bloom_then_verify(
        &self,
        number: BlockNumber,
        report: &mut StageReport,
    ) -> Result<(), BenchError> {
        if !self.bloom_probe(number, report).await? {
            return Ok(());
        }

        let payloads = self.source.raw_receipts(number).await?;
        let receipts = decode_receipt_list(&payloads)?;

        match classify(&receipts, &self.config.keys, self.config.strictness) {
            Classification::TruePositive => {
                report.true_positives += 1;
                info!(number, "event confirmed in receipts");
            }
            Classification::FalsePositive => {
                report.false_positives += 1;
                debug!(number, "bloom hit refuted by receipts");
            }
        }
        Ok(())
    }
}
