//! Conversions from SDK response types to domain entities.
//!
//! Identifiers the provider omits are mapped to empty strings rather than
//! errors; downstream lookups simply miss on them. CIDR strings that fail
//! to parse are dropped with a warning, which downstream code treats as
//! "no block assigned".

use dualstack_domain::{
    EgressOnlyGateway, Instance, IpAddressType, Listener, LoadBalancer, NetworkInterface, Route,
    RouteTable, Subnet, Vpc,
};
use ipnetwork::Ipv6Network;
use tracing::warn;

fn parse_block(raw: &str, owner: &str) -> Option<Ipv6Network> {
    match raw.parse() {
        Ok(block) => Some(block),
        Err(e) => {
            warn!(owner = %owner, cidr = %raw, error = %e, "Ignoring unparseable IPv6 CIDR");
            None
        }
    }
}

pub fn vpc_from_sdk(vpc: &aws_sdk_ec2::types::Vpc) -> Vpc {
    let vpc_id = vpc.vpc_id().unwrap_or_default().to_string();
    // First association is authoritative.
    let ipv6_block = vpc
        .ipv6_cidr_block_association_set()
        .first()
        .and_then(|assoc| assoc.ipv6_cidr_block())
        .and_then(|raw| parse_block(raw, &vpc_id));

    Vpc { vpc_id, ipv6_block }
}

pub fn subnet_from_sdk(subnet: &aws_sdk_ec2::types::Subnet) -> Subnet {
    let subnet_id = subnet.subnet_id().unwrap_or_default().to_string();
    let ipv6_block = subnet
        .ipv6_cidr_block_association_set()
        .first()
        .and_then(|assoc| assoc.ipv6_cidr_block())
        .and_then(|raw| parse_block(raw, &subnet_id));

    Subnet {
        subnet_id,
        vpc_id: subnet.vpc_id().unwrap_or_default().to_string(),
        ipv6_block,
    }
}

pub fn route_table_from_sdk(table: &aws_sdk_ec2::types::RouteTable) -> RouteTable {
    let routes = table
        .routes()
        .iter()
        .map(|route| {
            let destination = route
                .destination_cidr_block()
                .or(route.destination_ipv6_cidr_block())
                .unwrap_or_default()
                .to_string();
            let gateway_id = route
                .gateway_id()
                .or(route.egress_only_internet_gateway_id())
                .map(str::to_string);
            Route {
                destination,
                gateway_id,
            }
        })
        .collect();

    RouteTable {
        route_table_id: table.route_table_id().unwrap_or_default().to_string(),
        routes,
    }
}

pub fn egress_gateway_from_sdk(
    gateway: &aws_sdk_ec2::types::EgressOnlyInternetGateway,
) -> EgressOnlyGateway {
    EgressOnlyGateway {
        gateway_id: gateway
            .egress_only_internet_gateway_id()
            .unwrap_or_default()
            .to_string(),
        vpc_id: gateway
            .attachments()
            .first()
            .and_then(|att| att.vpc_id())
            .unwrap_or_default()
            .to_string(),
    }
}

pub fn instance_from_sdk(instance: &aws_sdk_ec2::types::Instance) -> Instance {
    let network_interfaces = instance
        .network_interfaces()
        .iter()
        .map(|eni| NetworkInterface {
            network_interface_id: eni.network_interface_id().unwrap_or_default().to_string(),
            subnet_id: eni.subnet_id().unwrap_or_default().to_string(),
        })
        .collect();

    Instance {
        instance_id: instance.instance_id().unwrap_or_default().to_string(),
        network_interfaces,
    }
}

pub fn load_balancer_from_sdk(
    balancer: &aws_sdk_elasticloadbalancingv2::types::LoadBalancer,
) -> LoadBalancer {
    let ip_address_type = balancer
        .ip_address_type()
        .map(|t| IpAddressType::from(t.as_str()))
        .unwrap_or(IpAddressType::Ipv4);

    LoadBalancer {
        arn: balancer.load_balancer_arn().unwrap_or_default().to_string(),
        ip_address_type,
    }
}

pub fn listener_from_sdk(listener: &aws_sdk_elasticloadbalancingv2::types::Listener) -> Listener {
    Listener {
        listener_arn: listener.listener_arn().unwrap_or_default().to_string(),
        port: listener.port().unwrap_or_default() as u16,
        protocol: listener
            .protocol()
            .map(|p| p.as_str().to_string())
            .unwrap_or_default(),
    }
}
