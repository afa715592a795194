use dualstack_domain::{DomainError, SubnetBlockAllocator};
use ipnetwork::Ipv6Network;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::NetworkProvider;

#[derive(Debug, Clone)]
pub struct SubnetAssignment {
    pub subnet_id: String,
    pub block: Ipv6Network,
}

/// Carve per-subnet blocks out of a VPC's IPv6 block and assign them to
/// every subnet that lacks one.
///
/// Blocks already held by sibling subnets are claimed up front, so a run
/// after a partial earlier assignment fills the gaps instead of colliding.
pub struct AssignSubnetCidrsUseCase {
    network: Arc<dyn NetworkProvider>,
}

impl AssignSubnetCidrsUseCase {
    pub fn new(network: Arc<dyn NetworkProvider>) -> Self {
        Self { network }
    }

    #[instrument(skip(self, vpc_block), fields(vpc_block = %vpc_block))]
    pub async fn execute(
        &self,
        vpc_id: &str,
        vpc_block: Ipv6Network,
        prefix_step: u8,
    ) -> Result<Vec<SubnetAssignment>, DomainError> {
        let subnets = self.network.describe_subnets(vpc_id).await?;

        let mut allocator = SubnetBlockAllocator::with_prefix_step(vpc_block, prefix_step)?;
        for subnet in &subnets {
            if let Some(block) = &subnet.ipv6_block {
                allocator.claim(block);
            }
        }

        let mut assigned = Vec::new();
        for subnet in &subnets {
            if subnet.has_ipv6() {
                debug!(subnet_id = %subnet.subnet_id, "Subnet already has an IPv6 block");
                continue;
            }

            let block = allocator.next_free()?;
            self.network
                .associate_subnet_ipv6_block(&subnet.subnet_id, block)
                .await?;

            info!(subnet_id = %subnet.subnet_id, block = %block, "Assigned IPv6 block to subnet");
            assigned.push(SubnetAssignment {
                subnet_id: subnet.subnet_id.clone(),
                block,
            });
        }

        Ok(assigned)
    }
}
