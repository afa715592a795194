use async_trait::async_trait;
use aws_sdk_ec2::types::Filter;
use aws_sdk_ec2::Client;
use dualstack_application::ports::NetworkProvider;
use dualstack_domain::{DomainError, EgressOnlyGateway, Instance, RouteTable, Subnet, Vpc};
use ipnetwork::Ipv6Network;
use tracing::{error, instrument};

use super::mapping;

/// EC2-backed implementation of the network port, scoped to one region.
pub struct AwsNetworkProvider {
    client: Client,
}

impl AwsNetworkProvider {
    pub async fn connect(region: &str) -> Self {
        let config = super::sdk_config(region).await;
        Self {
            client: Client::new(&config),
        }
    }

    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api_error(context: &str, e: impl std::fmt::Display) -> DomainError {
        error!(error = %e, "{context}");
        DomainError::Api(format!("{context}: {e}"))
    }

    fn provisioning_error(context: &str, e: impl std::fmt::Display) -> DomainError {
        error!(error = %e, "{context}");
        DomainError::Provisioning(format!("{context}: {e}"))
    }
}

#[async_trait]
impl NetworkProvider for AwsNetworkProvider {
    #[instrument(skip(self))]
    async fn list_regions(&self) -> Result<Vec<String>, DomainError> {
        let output = self
            .client
            .describe_regions()
            .send()
            .await
            .map_err(|e| Self::api_error("Failed to list regions", e))?;

        Ok(output
            .regions()
            .iter()
            .filter_map(|r| r.region_name())
            .map(str::to_string)
            .collect())
    }

    #[instrument(skip(self))]
    async fn describe_vpcs(&self) -> Result<Vec<Vpc>, DomainError> {
        let output = self
            .client
            .describe_vpcs()
            .send()
            .await
            .map_err(|e| Self::api_error("Failed to describe VPCs", e))?;

        Ok(output.vpcs().iter().map(mapping::vpc_from_sdk).collect())
    }

    #[instrument(skip(self))]
    async fn describe_vpc(&self, vpc_id: &str) -> Result<Vpc, DomainError> {
        let output = self
            .client
            .describe_vpcs()
            .vpc_ids(vpc_id)
            .send()
            .await
            .map_err(|e| Self::api_error("Failed to describe VPC", e))?;

        output
            .vpcs()
            .first()
            .map(mapping::vpc_from_sdk)
            .ok_or_else(|| DomainError::NotFound(vpc_id.to_string()))
    }

    #[instrument(skip(self))]
    async fn describe_subnets(&self, vpc_id: &str) -> Result<Vec<Subnet>, DomainError> {
        let output = self
            .client
            .describe_subnets()
            .filters(Filter::builder().name("vpc-id").values(vpc_id).build())
            .send()
            .await
            .map_err(|e| Self::api_error("Failed to describe subnets", e))?;

        Ok(output
            .subnets()
            .iter()
            .map(mapping::subnet_from_sdk)
            .collect())
    }

    #[instrument(skip(self))]
    async fn route_table_for_subnet(
        &self,
        subnet_id: &str,
    ) -> Result<Option<RouteTable>, DomainError> {
        let output = self
            .client
            .describe_route_tables()
            .filters(
                Filter::builder()
                    .name("association.subnet-id")
                    .values(subnet_id)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| Self::api_error("Failed to describe route tables", e))?;

        Ok(output.route_tables().first().map(mapping::route_table_from_sdk))
    }

    #[instrument(skip(self))]
    async fn associate_vpc_ipv6_block(&self, vpc_id: &str) -> Result<(), DomainError> {
        self.client
            .associate_vpc_cidr_block()
            .vpc_id(vpc_id)
            .amazon_provided_ipv6_cidr_block(true)
            .send()
            .await
            .map_err(|e| Self::provisioning_error("Failed to associate VPC IPv6 block", e))?;

        Ok(())
    }

    #[instrument(skip(self, block), fields(block = %block))]
    async fn associate_subnet_ipv6_block(
        &self,
        subnet_id: &str,
        block: Ipv6Network,
    ) -> Result<(), DomainError> {
        self.client
            .associate_subnet_cidr_block()
            .subnet_id(subnet_id)
            .ipv6_cidr_block(block.to_string())
            .send()
            .await
            .map_err(|e| Self::provisioning_error("Failed to associate subnet IPv6 block", e))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn describe_egress_only_gateways(
        &self,
    ) -> Result<Vec<EgressOnlyGateway>, DomainError> {
        let output = self
            .client
            .describe_egress_only_internet_gateways()
            .send()
            .await
            .map_err(|e| Self::api_error("Failed to describe egress-only gateways", e))?;

        Ok(output
            .egress_only_internet_gateways()
            .iter()
            .map(mapping::egress_gateway_from_sdk)
            .collect())
    }

    #[instrument(skip(self))]
    async fn create_egress_only_gateway(
        &self,
        vpc_id: &str,
    ) -> Result<EgressOnlyGateway, DomainError> {
        let output = self
            .client
            .create_egress_only_internet_gateway()
            .vpc_id(vpc_id)
            .send()
            .await
            .map_err(|e| Self::provisioning_error("Failed to create egress-only gateway", e))?;

        output
            .egress_only_internet_gateway()
            .map(mapping::egress_gateway_from_sdk)
            .ok_or_else(|| {
                DomainError::Provisioning(format!(
                    "no gateway returned when creating for {vpc_id}"
                ))
            })
    }

    #[instrument(skip(self))]
    async fn create_ipv6_default_route(
        &self,
        route_table_id: &str,
        gateway_id: &str,
    ) -> Result<(), DomainError> {
        self.client
            .create_route()
            .route_table_id(route_table_id)
            .destination_ipv6_cidr_block("::/0")
            .egress_only_internet_gateway_id(gateway_id)
            .send()
            .await
            .map_err(|e| Self::provisioning_error("Failed to create route", e))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn describe_running_instances(
        &self,
        subnet_id: &str,
    ) -> Result<Vec<Instance>, DomainError> {
        let output = self
            .client
            .describe_instances()
            .filters(Filter::builder().name("subnet-id").values(subnet_id).build())
            .filters(
                Filter::builder()
                    .name("instance-state-name")
                    .values("running")
                    .build(),
            )
            .send()
            .await
            .map_err(|e| Self::api_error("Failed to describe instances", e))?;

        Ok(output
            .reservations()
            .iter()
            .flat_map(|r| r.instances())
            .map(mapping::instance_from_sdk)
            .collect())
    }

    #[instrument(skip(self))]
    async fn assign_ipv6_addresses(
        &self,
        network_interface_id: &str,
        count: u32,
    ) -> Result<(), DomainError> {
        self.client
            .assign_ipv6_addresses()
            .network_interface_id(network_interface_id)
            .ipv6_address_count(count as i32)
            .send()
            .await
            .map_err(|e| Self::provisioning_error("Failed to assign IPv6 addresses", e))?;

        Ok(())
    }
}
