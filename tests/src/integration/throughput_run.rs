//! Whole-run throughput semantics over a synthetic batch.

use std::time::Duration;

use cp_harness::{items_per_second, IntegrityPolicy, ScanConfig, Stage, ThroughputHarness};
use shared_types::BlockRange;

use crate::fixtures::{sync_msg_keys, FixtureChain};

#[test]
fn historical_figure_reproduces() {
    // 2000 identifiers completing in 2000 ms reported 1000.0 items/second.
    assert_eq!(items_per_second(2000, Duration::from_millis(2000)), 1000.0);
}

#[tokio::test]
async fn full_stage_sweep_over_synthetic_batch() {
    let keys = sync_msg_keys();
    let mut chain = FixtureChain::new();
    for number in 0..200 {
        chain.add_empty_block(number);
    }

    let harness = ThroughputHarness::new(chain, ScanConfig::new(keys));
    let reports = harness.run_all(BlockRange::new(0, 200)).await.unwrap();

    assert_eq!(reports.len(), Stage::ALL.len());
    for report in &reports {
        assert_eq!(report.items, 200, "{} processed every block", report.stage.name());
        assert_eq!(report.bloom_hits + report.true_positives + report.false_positives, 0);
        assert!(report.items_per_second() >= 0.0);
    }
}

#[tokio::test]
async fn empty_batch_reports_zero_not_a_crash() {
    let harness = ThroughputHarness::new(FixtureChain::new(), ScanConfig::new(sync_msg_keys()));
    let reports = harness.run_all(BlockRange::new(500, 500)).await.unwrap();
    for report in reports {
        assert_eq!(report.items, 0);
        assert_eq!(report.items_per_second(), 0.0);
    }
}

#[tokio::test]
async fn corrupted_block_counted_but_batch_survives() {
    let keys = sync_msg_keys();
    let mut chain = FixtureChain::new();
    chain.add_empty_block(0);
    chain.add_corrupted_block(1);
    chain.add_empty_block(2);

    let harness = ThroughputHarness::new(chain, ScanConfig::new(keys));
    let report = harness
        .run(BlockRange::new(0, 3), Stage::BlockFetchAndHashCheck)
        .await
        .expect("default policy logs and continues");

    assert_eq!(report.items, 3);
    assert_eq!(report.integrity_mismatches, 1);
}

#[tokio::test]
async fn corrupted_block_fatal_when_policy_aborts() {
    let keys = sync_msg_keys();
    let mut chain = FixtureChain::new();
    chain.add_empty_block(0);
    chain.add_corrupted_block(1);

    let config = ScanConfig::new(keys).with_integrity_policy(IntegrityPolicy::Abort);
    let harness = ThroughputHarness::new(chain, config);
    assert!(harness
        .run(BlockRange::new(0, 2), Stage::BlockFetchAndHashCheck)
        .await
        .is_err());
}
