use async_trait::async_trait;
use dualstack_domain::{DomainError, EgressOnlyGateway, Instance, RouteTable, Subnet, Vpc};
use ipnetwork::Ipv6Network;

/// Virtual-network control plane of one region.
///
/// Calls are synchronous request/response with no retry wrapper; every
/// mutation is preceded by a fresh describe (describe-then-act).
#[async_trait]
pub trait NetworkProvider: Send + Sync {
    /// List every region visible to the account
    async fn list_regions(&self) -> Result<Vec<String>, DomainError>;

    /// All VPCs in this region
    async fn describe_vpcs(&self) -> Result<Vec<Vpc>, DomainError>;

    /// Re-fetch a single VPC (used after an asynchronous block assignment)
    async fn describe_vpc(&self, vpc_id: &str) -> Result<Vpc, DomainError>;

    /// Subnets of a VPC
    async fn describe_subnets(&self, vpc_id: &str) -> Result<Vec<Subnet>, DomainError>;

    /// Route table associated with a subnet, if any
    async fn route_table_for_subnet(
        &self,
        subnet_id: &str,
    ) -> Result<Option<RouteTable>, DomainError>;

    /// Request a provider-assigned IPv6 block for a VPC. Assignment is
    /// asynchronous from the request; re-describe the VPC to read it.
    async fn associate_vpc_ipv6_block(&self, vpc_id: &str) -> Result<(), DomainError>;

    /// Associate a specific IPv6 block with a subnet
    async fn associate_subnet_ipv6_block(
        &self,
        subnet_id: &str,
        block: Ipv6Network,
    ) -> Result<(), DomainError>;

    /// All egress-only gateways in this region
    async fn describe_egress_only_gateways(&self)
        -> Result<Vec<EgressOnlyGateway>, DomainError>;

    /// Create an egress-only gateway attached to a VPC
    async fn create_egress_only_gateway(
        &self,
        vpc_id: &str,
    ) -> Result<EgressOnlyGateway, DomainError>;

    /// Add a default IPv6 route (`::/0`) through an egress-only gateway
    async fn create_ipv6_default_route(
        &self,
        route_table_id: &str,
        gateway_id: &str,
    ) -> Result<(), DomainError>;

    /// Running instances whose interfaces live in a subnet
    async fn describe_running_instances(
        &self,
        subnet_id: &str,
    ) -> Result<Vec<Instance>, DomainError>;

    /// Request `count` additional IPv6 addresses for a network interface
    async fn assign_ipv6_addresses(
        &self,
        network_interface_id: &str,
        count: u32,
    ) -> Result<(), DomainError>;
}
