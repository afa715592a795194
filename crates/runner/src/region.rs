use dualstack_application::ports::{LoadBalancerProvider, NetworkProvider};
use dualstack_application::use_cases::EnableDualStackUseCase;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::report::RegionReport;
use crate::vpc::VpcReconciler;

/// Runs one region end to end: every VPC through the `VpcReconciler`,
/// then the region-wide load balancer dual-stack pass.
///
/// One VPC's failure is recorded and does not abort the rest of the region.
pub struct RegionReconciler {
    network: Arc<dyn NetworkProvider>,
    vpc: VpcReconciler,
    enable_dual_stack: EnableDualStackUseCase,
}

impl RegionReconciler {
    pub fn new(
        network: Arc<dyn NetworkProvider>,
        load_balancers: Arc<dyn LoadBalancerProvider>,
        subnet_prefix_step: u8,
    ) -> Self {
        Self {
            vpc: VpcReconciler::new(Arc::clone(&network), subnet_prefix_step),
            enable_dual_stack: EnableDualStackUseCase::new(load_balancers),
            network,
        }
    }

    #[instrument(skip(self))]
    pub async fn run(&self, region: &str) -> RegionReport {
        let mut report = RegionReport::new(region);
        info!("Processing region");

        let vpcs = match self.network.describe_vpcs().await {
            Ok(vpcs) => vpcs,
            Err(e) => {
                error!(error = %e, "Failed to list VPCs");
                report.error = Some(e.to_string());
                return report;
            }
        };

        for vpc in &vpcs {
            report.vpcs.push(self.vpc.run(vpc).await);
        }

        match self.enable_dual_stack.execute().await {
            Ok(balancers) => report.load_balancers = Some(balancers),
            Err(e) => {
                error!(error = %e, "Failed to process load balancers");
                report.error = Some(e.to_string());
            }
        }

        report
    }
}
