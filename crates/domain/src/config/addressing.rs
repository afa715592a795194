use serde::{Deserialize, Serialize};

/// IPv6 partitioning parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddressingConfig {
    /// Prefix bits added to a VPC block when carving subnet blocks
    /// (default: 8, i.e. /56 VPC blocks yield /64 subnet blocks)
    #[serde(default = "default_subnet_prefix_step")]
    pub subnet_prefix_step: u8,
}

impl Default for AddressingConfig {
    fn default() -> Self {
        Self {
            subnet_prefix_step: default_subnet_prefix_step(),
        }
    }
}

fn default_subnet_prefix_step() -> u8 {
    crate::ipv6_allocator::SUBNET_PREFIX_STEP
}
