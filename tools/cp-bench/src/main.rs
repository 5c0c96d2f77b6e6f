//! cp-bench: measure raw block-data retrieval throughput against a node's
//! debug RPC surface, with optional bloom event detection and receipt
//! verification.

use anyhow::{ensure, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cp_harness::{IntegrityPolicy, ScanConfig, Stage, Strictness, ThroughputHarness};
use cp_rpc_client::RpcClient;
use shared_types::{BlockRange, QueryKeySet};

/// cp-bench: block-data retrieval throughput benchmark
#[derive(Parser, Debug)]
#[command(name = "cp-bench")]
#[command(about = "Throughput measurement for raw block data, with bloom event detection")]
struct Args {
    /// JSON-RPC endpoint serving the debug_getRaw* methods
    #[arg(short, long, default_value = "http://127.0.0.1:8545/")]
    endpoint: String,

    /// First block of the range (inclusive)
    #[arg(long, default_value_t = 8_627_000)]
    start_block: u64,

    /// End of the range (exclusive)
    #[arg(long, default_value_t = 8_629_000)]
    end_block: u64,

    /// Pipeline stage to run; repeatable. Defaults to all four in order.
    #[arg(long = "stage", value_enum)]
    stages: Vec<StageArg>,

    /// ABI event signature; its keccak-256 is topic 0
    #[arg(long, default_value = "SyncMsg(bytes16,bytes32)")]
    event_signature: String,

    /// Session id as 32-byte hex (topic 1)
    #[arg(
        long,
        default_value = "52fdfc072182654f163f5f0f9a621d7200000000000000000000000000000000"
    )]
    session_id: String,

    /// Nonce as 32-byte hex (topic 2)
    #[arg(
        long,
        default_value = "9566c74d10037c4d7bbb0407d1e2c64981855ad8681d0d86d1e91e00167939cb"
    )]
    nonce: String,

    /// Receipt verification mode
    #[arg(long, value_enum, default_value_t = StrictnessArg::FirstLogOnly)]
    strictness: StrictnessArg,

    /// What to do when a block's declared hash disagrees with its header
    #[arg(long, value_enum, default_value_t = IntegrityPolicyArg::Warn)]
    integrity_policy: IntegrityPolicyArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StageArg {
    HeaderFetch,
    BlockHashCheck,
    HeaderBloom,
    BloomReceiptVerify,
}

impl From<StageArg> for Stage {
    fn from(arg: StageArg) -> Self {
        match arg {
            StageArg::HeaderFetch => Stage::HeaderFetch,
            StageArg::BlockHashCheck => Stage::BlockFetchAndHashCheck,
            StageArg::HeaderBloom => Stage::HeaderBloomProbe,
            StageArg::BloomReceiptVerify => Stage::BloomThenReceiptVerify,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrictnessArg {
    FirstLogOnly,
    AnyLogInReceipt,
    AnyLogInBlock,
}

impl From<StrictnessArg> for Strictness {
    fn from(arg: StrictnessArg) -> Self {
        match arg {
            StrictnessArg::FirstLogOnly => Strictness::FirstLogOnly,
            StrictnessArg::AnyLogInReceipt => Strictness::AnyLogInReceipt,
            StrictnessArg::AnyLogInBlock => Strictness::AnyLogInBlock,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum IntegrityPolicyArg {
    Warn,
    Skip,
    Abort,
}

impl From<IntegrityPolicyArg> for IntegrityPolicy {
    fn from(arg: IntegrityPolicyArg) -> Self {
        match arg {
            IntegrityPolicyArg::Warn => IntegrityPolicy::Warn,
            IntegrityPolicyArg::Skip => IntegrityPolicy::Skip,
            IntegrityPolicyArg::Abort => IntegrityPolicy::Abort,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    ensure!(
        args.start_block <= args.end_block,
        "start block {} is past end block {}",
        args.start_block,
        args.end_block
    );

    let keys = QueryKeySet::from_hex_args(&args.event_signature, &args.session_id, &args.nonce)
        .context("parsing query keys")?;
    let client = RpcClient::new(&args.endpoint).context("creating RPC client")?;

    let config = ScanConfig::new(keys)
        .with_strictness(args.strictness.into())
        .with_integrity_policy(args.integrity_policy.into());
    let harness = ThroughputHarness::new(client, config);

    let stages: Vec<Stage> = if args.stages.is_empty() {
        Stage::ALL.to_vec()
    } else {
        args.stages.iter().map(|&s| s.into()).collect()
    };

    info!(
        endpoint = %args.endpoint,
        start = args.start_block,
        end = args.end_block,
        blocks = args.end_block - args.start_block,
        "starting throughput run"
    );

    for stage in stages {
        let range = BlockRange::new(args.start_block, args.end_block);
        let report = harness
            .run(range, stage)
            .await
            .with_context(|| format!("stage '{}' failed", stage.name()))?;
        println!("{report}");
    }

    Ok(())
}
