use ipnetwork::Ipv6Network;

/// A virtual private cloud as fetched from the provider.
///
/// `ipv6_block` holds the first IPv6 CIDR association reported by the
/// provider; that association is authoritative for subnet partitioning.
#[derive(Debug, Clone)]
pub struct Vpc {
    pub vpc_id: String,
    pub ipv6_block: Option<Ipv6Network>,
}

impl Vpc {
    pub fn new(vpc_id: impl Into<String>) -> Self {
        Self {
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
