//! End-to-end event detection: bloom probe resolved against receipts.

use cp_bloom_filter::Bloom;
use cp_harness::{
    classify, BenchError, Classification, FetchError, ScanConfig, Stage, Strictness,
    ThroughputHarness,
};
use cp_record_codec::decode_receipt;
use shared_types::BlockRange;

use crate::fixtures::{matching_receipt, sync_msg_keys, wrong_nonce_receipt, FixtureChain};

#[tokio::test]
async fn wrong_nonce_hit_is_resolved_as_false_positive() {
    // The filter has all three probes' bits set by construction, so the
    // membership test passes; the receipts carry a different nonce, so
    // verification must refute the hit.
    let keys = sync_msg_keys();

    let mut bloom = Bloom::default();
    for key in keys.as_probe_inputs() {
        bloom.accrue(key);
    }
    assert!(
        bloom.contains_all(keys.as_probe_inputs()),
        "All three keys were accrued, the test cannot miss"
    );

    let mut chain = FixtureChain::new();
    chain.add_block(100, &keys.as_probe_inputs(), &[wrong_nonce_receipt(&keys)]);

    let harness = ThroughputHarness::new(chain, ScanConfig::new(keys));
    let report = harness
        .run(BlockRange::new(100, 101), Stage::BloomThenReceiptVerify)
        .await
        .unwrap();

    assert_eq!(report.bloom_hits, 1);
    assert_eq!(report.true_positives, 0);
    assert_eq!(report.false_positives, 1);
}

#[tokio::test]
async fn genuine_event_is_confirmed() {
    let keys = sync_msg_keys();
    let mut chain = FixtureChain::new();
    chain.add_block(200, &keys.as_probe_inputs(), &[matching_receipt(&keys)]);
    chain.add_empty_block(201);

    let harness = ThroughputHarness::new(chain, ScanConfig::new(keys));
    let report = harness
        .run(BlockRange::new(200, 202), Stage::BloomThenReceiptVerify)
        .await
        .unwrap();

    assert_eq!(report.items, 2);
    assert_eq!(report.bloom_hits, 1);
    assert_eq!(report.true_positives, 1);
    assert_eq!(report.false_positives, 0);
}

#[tokio::test]
async fn blocks_without_accrued_keys_never_hit() {
    let keys = sync_msg_keys();
    let mut chain = FixtureChain::new();
    for number in 0..50 {
        chain.add_block(number, &[b"some other topic".as_slice()], &[]);
    }

    let harness = ThroughputHarness::new(chain, ScanConfig::new(keys));
    let report = harness
        .run(BlockRange::new(0, 50), Stage::HeaderBloomProbe)
        .await
        .unwrap();

    assert_eq!(report.items, 50);
    assert_eq!(
        report.bloom_hits, 0,
        "None of the three keys were accrued anywhere"
    );
}

#[test]
fn verification_strictness_changes_the_outcome() {
    let keys = sync_msg_keys();

    // The matching log is the second log of the receipt: invisible to the
    // default first-log-only scan.
    let mut receipt = wrong_nonce_receipt(&keys);
    receipt.logs.push(matching_receipt(&keys).logs[0].clone());
    let payload = cp_record_codec::encode_receipt(&receipt);
    let decoded = decode_receipt(&payload).unwrap();

    assert_eq!(
        classify(std::slice::from_ref(&decoded), &keys, Strictness::FirstLogOnly),
        Classification::FalsePositive,
    );
    assert_eq!(
        classify(std::slice::from_ref(&decoded), &keys, Strictness::AnyLogInReceipt),
        Classification::TruePositive,
    );
}

#[tokio::test]
async fn missing_receipts_fail_the_verify_stage() {
    let keys = sync_msg_keys();

    // Header present with a hot bloom, but the receipt fetch fails.
    let mut chain = FixtureChain::new();
    chain.add_block(7, &keys.as_probe_inputs(), &[]);

    struct HeaderOnly(FixtureChain);

    #[async_trait::async_trait]
    impl cp_harness::RawBlockSource for HeaderOnly {
        async fn raw_header(&self, number: u64) -> Result<Vec<u8>, FetchError> {
            self.0.raw_header(number).await
        }
        async fn raw_block(&self, number: u64) -> Result<Vec<u8>, FetchError> {
            self.0.raw_block(number).await
        }
        async fn raw_receipts(&self, _number: u64) -> Result<Vec<Vec<u8>>, FetchError> {
            Err(FetchError::Transport("connection reset".into()))
        }
    }

    let harness = ThroughputHarness::new(HeaderOnly(chain), ScanConfig::new(keys));
    let err = harness
        .run(BlockRange::new(7, 8), Stage::BloomThenReceiptVerify)
        .await
        .unwrap_err();
    assert!(matches!(err, BenchError::Fetch(FetchError::Transport(_))));
}
