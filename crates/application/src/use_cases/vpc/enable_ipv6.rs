use dualstack_domain::{DomainError, Vpc};
use ipnetwork::Ipv6Network;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::NetworkProvider;

/// Ensure exactly one IPv6 block is associated with a VPC.
///
/// A VPC that already carries a block is returned unchanged with zero
/// mutating calls. Otherwise a provider-assigned block is requested and the
/// VPC is re-described to read the assigned value, since the assignment is
/// asynchronous from the request.
pub struct EnableVpcIpv6UseCase {
    network: Arc<dyn NetworkProvider>,
}

impl EnableVpcIpv6UseCase {
    pub fn new(network: Arc<dyn NetworkProvider>) -> Self {
        Self { network }
    }

    #[instrument(skip(self, vpc), fields(vpc_id = %vpc.vpc_id))]
    pub async fn execute(&self, vpc: &Vpc) -> Result<Ipv6Network, DomainError> {
        if let Some(block) = vpc.ipv6_block {
            info!(block = %block, "VPC already has an IPv6 block");
            return Ok(block);
        }

        self.network.associate_vpc_ipv6_block(&vpc.vpc_id).await?;

        let refreshed = self.network.describe_vpc(&vpc.vpc_id).await?;
        let block = refreshed.ipv6_block.ok_or_else(|| {
            DomainError::Provisioning(format!(
                "no IPv6 block visible on {} after association",
                vpc.vpc_id
            ))
        })?;

        info!(block = %block, "Assigned IPv6 block to VPC");
        Ok(block)
    }
}
