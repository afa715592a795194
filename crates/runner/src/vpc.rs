use dualstack_application::ports::NetworkProvider;
use dualstack_application::use_cases::{
    AssignInstanceAddressesUseCase, AssignSubnetCidrsUseCase, EnableVpcIpv6UseCase,
    ProvisionEgressGatewayUseCase,
};
use dualstack_domain::{classify_subnet, SubnetClassification, Vpc};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::report::VpcReport;

/// Runs the ordered reconciliation steps for one VPC:
/// IPv6 enablement, subnet block assignment, egress-only routing for
/// private subnets, then instance addressing in private IPv6-enabled
/// subnets.
///
/// A failing step aborts the remaining steps of this VPC only; the error
/// lands in the report and the caller moves on to the next VPC.
pub struct VpcReconciler {
    network: Arc<dyn NetworkProvider>,
    enable_vpc_ipv6: EnableVpcIpv6UseCase,
    assign_subnet_cidrs: AssignSubnetCidrsUseCase,
    provision_egress: ProvisionEgressGatewayUseCase,
    assign_addresses: AssignInstanceAddressesUseCase,
    subnet_prefix_step: u8,
}

impl VpcReconciler {
    pub fn new(network: Arc<dyn NetworkProvider>, subnet_prefix_step: u8) -> Self {
        Self {
            enable_vpc_ipv6: EnableVpcIpv6UseCase::new(Arc::clone(&network)),
            assign_subnet_cidrs: AssignSubnetCidrsUseCase::new(Arc::clone(&network)),
            provision_egress: ProvisionEgressGatewayUseCase::new(Arc::clone(&network)),
            assign_addresses: AssignInstanceAddressesUseCase::new(Arc::clone(&network)),
            network,
            subnet_prefix_step,
        }
    }

    #[instrument(skip(self, vpc), fields(vpc_id = %vpc.vpc_id))]
    pub async fn run(&self, vpc: &Vpc) -> VpcReport {
        let mut report = VpcReport::new(&vpc.vpc_id);
        info!("Processing VPC");

        match self.reconcile(vpc, &mut report).await {
            Ok(()) => report,
            Err(e) => {
                error!(error = %e, "VPC reconciliation aborted");
                report.error = Some(e.to_string());
                report
            }
        }
    }

    async fn reconcile(
        &self,
        vpc: &Vpc,
        report: &mut VpcReport,
    ) -> Result<(), dualstack_domain::DomainError> {
        let block = self.enable_vpc_ipv6.execute(vpc).await?;
        report.ipv6_block = Some(block.to_string());

        let assigned = self
            .assign_subnet_cidrs
            .execute(&vpc.vpc_id, block, self.subnet_prefix_step)
            .await?;
        report.subnets_assigned = assigned.len();

        let egress = self.provision_egress.execute(&vpc.vpc_id).await?;
        report.egress = Some(egress);

        self.assign_private_addresses(&vpc.vpc_id, report).await
    }

    /// Instance addressing only applies to private subnets that now carry
    /// an IPv6 block; state is re-described rather than carried over from
    /// the earlier steps.
    async fn assign_private_addresses(
        &self,
        vpc_id: &str,
        report: &mut VpcReport,
    ) -> Result<(), dualstack_domain::DomainError> {
        let subnets = self.network.describe_subnets(vpc_id).await?;

        for subnet in &subnets {
            if !subnet.has_ipv6() {
                info!(subnet_id = %subnet.subnet_id, "Subnet has no IPv6 block; skipping instances");
                continue;
            }

            let table = self
                .network
                .route_table_for_subnet(&subnet.subnet_id)
                .await?;
            if classify_subnet(table.as_ref()) != SubnetClassification::Private {
                continue;
            }

            let assigned = self.assign_addresses.execute(&subnet.subnet_id).await?;
            report.addresses_assigned += assigned.interfaces;
        }

        Ok(())
    }
}
