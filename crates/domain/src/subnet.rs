use ipnetwork::Ipv6Network;

/// A subnet as fetched from the provider.
#[derive(Debug, Clone)]
pub struct Subnet {
    pub subnet_id: String,
    pub vpc_id: String,
    pub ipv6_block: Option<Ipv6Network>,
}

impl Subnet {
    pub fn new(subnet_id: impl Into<String>, vpc_id: impl Into<String>) -> Self {
        Self {
            subnet_id: subnet_id.into(),
            vpc_id: vpc_id.into(),
            ipv6_block: None,
        }
    }

    pub fn with_ipv6_block(mut self, block: Ipv6Network) -> Self {
        self.ipv6_block = Some(block);
        self
    }

    pub fn has_ipv6(&self) -> bool {
        self.ipv6_block.is_some()
    }
}
