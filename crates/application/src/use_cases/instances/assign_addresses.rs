use dualstack_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::NetworkProvider;

#[derive(Debug, Clone, Copy, Default)]
pub struct AssignedAddresses {
    pub instances: usize,
    pub interfaces: usize,
}

/// Assign one additional IPv6 address to each network interface of every
/// running instance in a subnet.
///
/// Deliberately not idempotent: the operation does not inspect existing
/// addresses, so each run adds one more address per interface.
pub struct AssignInstanceAddressesUseCase {
    network: Arc<dyn NetworkProvider>,
}

impl AssignInstanceAddressesUseCase {
    pub fn new(network: Arc<dyn NetworkProvider>) -> Self {
        Self { network }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, subnet_id: &str) -> Result<AssignedAddresses, DomainError> {
        let instances = self.network.describe_running_instances(subnet_id).await?;
        let mut assigned = AssignedAddresses::default();

        for instance in &instances {
            let mut touched = false;
            for interface in instance.interfaces_in_subnet(subnet_id) {
                self.network
                    .assign_ipv6_addresses(&interface.network_interface_id, 1)
                    .await?;

                info!(
                    instance_id = %instance.instance_id,
                    network_interface_id = %interface.network_interface_id,
                    "Assigned IPv6 address"
                );
                assigned.interfaces += 1;
                touched = true;
            }
            if touched {
                assigned.instances += 1;
            }
        }

        Ok(assigned)
    }
}
