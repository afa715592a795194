//! # dualstack
//!
//! Enables IPv6 dual-stack networking across an AWS account: VPC and
//! subnet IPv6 blocks, egress-only routing for private subnets, dual-stack
//! load balancers and instance addressing.

use clap::Parser;
use dualstack_application::ports::NetworkProvider;
use dualstack_domain::{CliOverrides, Config};
use dualstack_infrastructure::AwsNetworkProvider;
use dualstack_runner::RunReport;
use tracing::info;

mod bootstrap;
mod di;

/// Region used to bootstrap discovery when none is configured.
const DISCOVERY_SEED_REGION: &str = "us-east-1";

#[derive(Parser)]
#[command(name = "dualstack")]
#[command(version)]
#[command(about = "Enable IPv6 dual-stack across an AWS account's VPCs, subnets and load balancers")]
struct Cli {
    /// Path to the configuration file (default: dualstack.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Region to reconcile (repeatable); overrides the config file
    #[arg(short = 'r', long = "region")]
    regions: Vec<String>,

    /// Discover and reconcile every region the account can see
    #[arg(long)]
    all_regions: bool,

    /// Log level override ("trace" .. "error")
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        regions: (!cli.regions.is_empty()).then(|| cli.regions.clone()),
        all_regions: cli.all_regions,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    let report = run(&config).await?;
    report.log_summary();

    std::process::exit(report.exit_code());
}

async fn run(config: &Config) -> anyhow::Result<RunReport> {
    let regions = select_regions(config).await?;
    let mut report = RunReport::new();

    for region in &regions {
        info!(region = %region, "Reconciling region");
        let services = di::RegionServices::connect(region, config).await;
        report.push_region(services.reconciler.run(region).await);
    }

    Ok(report)
}

/// Explicit region list from config/CLI, or full discovery when opted in.
async fn select_regions(config: &Config) -> anyhow::Result<Vec<String>> {
    if !config.regions.discover_all {
        return Ok(config.regions.names.clone());
    }

    let seed = config
        .regions
        .names
        .first()
        .map(String::as_str)
        .unwrap_or(DISCOVERY_SEED_REGION);

    let network = AwsNetworkProvider::connect(seed).await;
    let regions = network.list_regions().await?;
    info!(count = regions.len(), "Discovered regions");
    Ok(regions)
}
