#![allow(dead_code)]

use async_trait::async_trait;
use dualstack_application::ports::{LoadBalancerProvider, NetworkProvider};
use dualstack_domain::{
    DomainError, EgressOnlyGateway, Instance, Listener, LoadBalancer, RouteTable, Subnet, Vpc,
};
use ipnetwork::Ipv6Network;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock NetworkProvider
// ============================================================================

pub struct MockNetworkProvider {
    vpcs: Arc<RwLock<Vec<Vpc>>>,
    subnets: Arc<RwLock<Vec<Subnet>>>,
    route_tables: Arc<RwLock<HashMap<String, RouteTable>>>,
    egress_gateways: Arc<RwLock<Vec<EgressOnlyGateway>>>,
    instances: Arc<RwLock<HashMap<String, Vec<Instance>>>>,
    regions: Arc<RwLock<Vec<String>>>,

    /// Block handed out by the provider when a VPC association is requested.
    provider_block: Arc<RwLock<Option<Ipv6Network>>>,

    associate_vpc_calls: Arc<AtomicU64>,
    associate_subnet_calls: Arc<AtomicU64>,
    create_gateway_calls: Arc<AtomicU64>,
    create_route_calls: Arc<AtomicU64>,
    assign_address_calls: Arc<AtomicU64>,

    fail_associate_vpc: Arc<RwLock<bool>>,
    fail_create_route: Arc<RwLock<bool>>,
}

impl MockNetworkProvider {
    pub fn new() -> Self {
        Self {
            vpcs: Arc::new(RwLock::new(Vec::new())),
            subnets: Arc::new(RwLock::new(Vec::new())),
            route_tables: Arc::new(RwLock::new(HashMap::new())),
            egress_gateways: Arc::new(RwLock::new(Vec::new())),
            instances: Arc::new(RwLock::new(HashMap::new())),
            regions: Arc::new(RwLock::new(vec!["us-east-1".to_string()])),
            provider_block: Arc::new(RwLock::new(None)),
            associate_vpc_calls: Arc::new(AtomicU64::new(0)),
            associate_subnet_calls: Arc::new(AtomicU64::new(0)),
            create_gateway_calls: Arc::new(AtomicU64::new(0)),
            create_route_calls: Arc::new(AtomicU64::new(0)),
            assign_address_calls: Arc::new(AtomicU64::new(0)),
            fail_associate_vpc: Arc::new(RwLock::new(false)),
            fail_create_route: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn add_vpc(&self, vpc: Vpc) {
        self.vpcs.write().await.push(vpc);
    }

    pub async fn add_subnet(&self, subnet: Subnet) {
        self.subnets.write().await.push(subnet);
    }

    pub async fn add_route_table(&self, subnet_id: &str, table: RouteTable) {
        self.route_tables
            .write()
            .await
            .insert(subnet_id.to_string(), table);
    }

    pub async fn add_egress_gateway(&self, gateway: EgressOnlyGateway) {
        self.egress_gateways.write().await.push(gateway);
    }

    pub async fn add_instances(&self, subnet_id: &str, instances: Vec<Instance>) {
        self.instances
            .write()
            .await
            .insert(subnet_id.to_string(), instances);
    }

    /// Block the provider will assign on the next VPC association.
    pub async fn set_provider_block(&self, block: Ipv6Network) {
        *self.provider_block.write().await = Some(block);
    }

    pub async fn set_fail_associate_vpc(&self, fail: bool) {
        *self.fail_associate_vpc.write().await = fail;
    }

    pub async fn set_fail_create_route(&self, fail: bool) {
        *self.fail_create_route.write().await = fail;
    }

    pub fn associate_vpc_calls(&self) -> u64 {
        self.associate_vpc_calls.load(Ordering::Relaxed)
    }

    pub fn associate_subnet_calls(&self) -> u64 {
        self.associate_subnet_calls.load(Ordering::Relaxed)
    }

    pub fn create_gateway_calls(&self) -> u64 {
        self.create_gateway_calls.load(Ordering::Relaxed)
    }

    pub fn create_route_calls(&self) -> u64 {
        self.create_route_calls.load(Ordering::Relaxed)
    }

    pub fn assign_address_calls(&self) -> u64 {
        self.assign_address_calls.load(Ordering::Relaxed)
    }

    pub async fn subnet_block(&self, subnet_id: &str) -> Option<Ipv6Network> {
        self.subnets
            .read()
            .await
            .iter()
            .find(|s| s.subnet_id == subnet_id)
            .and_then(|s| s.ipv6_block)
    }
}

#[async_trait]
impl NetworkProvider for MockNetworkProvider {
    async fn list_regions(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.regions.read().await.clone())
    }

    async fn describe_vpcs(&self) -> Result<Vec<Vpc>, DomainError> {
        Ok(self.vpcs.read().await.clone())
    }

    async fn describe_vpc(&self, vpc_id: &str) -> Result<Vpc, DomainError> {
        self.vpcs
            .read()
            .await
            .iter()
            .find(|v| v.vpc_id == vpc_id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(vpc_id.to_string()))
    }

    async fn describe_subnets(&self, vpc_id: &str) -> Result<Vec<Subnet>, DomainError> {
        Ok(self
            .subnets
            .read()
            .await
            .iter()
            .filter(|s| s.vpc_id == vpc_id)
            .cloned()
            .collect())
    }

    async fn route_table_for_subnet(
        &self,
        subnet_id: &str,
    ) -> Result<Option<RouteTable>, DomainError> {
        Ok(self.route_tables.read().await.get(subnet_id).cloned())
    }

    async fn associate_vpc_ipv6_block(&self, vpc_id: &str) -> Result<(), DomainError> {
        self.associate_vpc_calls.fetch_add(1, Ordering::Relaxed);
        if *self.fail_associate_vpc.read().await {
            return Err(DomainError::Provisioning(
                "address quota exceeded".to_string(),
            ));
        }

        let block = *self.provider_block.read().await;
        let mut vpcs = self.vpcs.write().await;
        let vpc = vpcs
            .iter_mut()
            .find(|v| v.vpc_id == vpc_id)
            .ok_or_else(|| DomainError::NotFound(vpc_id.to_string()))?;
        vpc.ipv6_block = block;
        Ok(())
    }

    async fn associate_subnet_ipv6_block(
        &self,
        subnet_id: &str,
        block: Ipv6Network,
    ) -> Result<(), DomainError> {
        self.associate_subnet_calls.fetch_add(1, Ordering::Relaxed);
        let mut subnets = self.subnets.write().await;
        let subnet = subnets
            .iter_mut()
            .find(|s| s.subnet_id == subnet_id)
            .ok_or_else(|| DomainError::NotFound(subnet_id.to_string()))?;
        subnet.ipv6_block = Some(block);
        Ok(())
    }

    async fn describe_egress_only_gateways(
        &self,
    ) -> Result<Vec<EgressOnlyGateway>, DomainError> {
        Ok(self.egress_gateways.read().await.clone())
    }

    async fn create_egress_only_gateway(
        &self,
        vpc_id: &str,
    ) -> Result<EgressOnlyGateway, DomainError> {
        let id = self.create_gateway_calls.fetch_add(1, Ordering::Relaxed) + 1;
        let gateway = EgressOnlyGateway::new(format!("eigw-{id:08x}"), vpc_id);
        self.egress_gateways.write().await.push(gateway.clone());
        Ok(gateway)
    }

    async fn create_ipv6_default_route(
        &self,
        route_table_id: &str,
        gateway_id: &str,
    ) -> Result<(), DomainError> {
        self.create_route_calls.fetch_add(1, Ordering::Relaxed);
        if *self.fail_create_route.read().await {
            return Err(DomainError::Provisioning("route already exists".to_string()));
        }

        let mut tables = self.route_tables.write().await;
        let table = tables
            .values_mut()
            .find(|t| t.route_table_id == route_table_id)
            .ok_or_else(|| DomainError::NotFound(route_table_id.to_string()))?;
        table.routes.push(dualstack_domain::Route::new(
            "::/0",
            Some(gateway_id.to_string()),
        ));
        Ok(())
    }

    async fn describe_running_instances(
        &self,
        subnet_id: &str,
    ) -> Result<Vec<Instance>, DomainError> {
        Ok(self
            .instances
            .read()
            .await
            .get(subnet_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn assign_ipv6_addresses(
        &self,
        _network_interface_id: &str,
        _count: u32,
    ) -> Result<(), DomainError> {
        self.assign_address_calls.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

// ============================================================================
// Mock LoadBalancerProvider
// ============================================================================

pub struct MockLoadBalancerProvider {
    balancers: Arc<RwLock<Vec<LoadBalancer>>>,
    listeners: Arc<RwLock<HashMap<String, Vec<Listener>>>>,

    set_dual_stack_calls: Arc<AtomicU64>,
    reapply_calls: Arc<AtomicU64>,

    fail_set_dual_stack: Arc<RwLock<bool>>,
}

impl MockLoadBalancerProvider {
    pub fn new() -> Self {
        Self {
            balancers: Arc::new(RwLock::new(Vec::new())),
            listeners: Arc::new(RwLock::new(HashMap::new())),
            set_dual_stack_calls: Arc::new(AtomicU64::new(0)),
            reapply_calls: Arc::new(AtomicU64::new(0)),
            fail_set_dual_stack: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn add_balancer(&self, balancer: LoadBalancer, listeners: Vec<Listener>) {
        self.listeners
            .write()
            .await
            .insert(balancer.arn.clone(), listeners);
        self.balancers.write().await.push(balancer);
    }

    pub async fn set_fail_set_dual_stack(&self, fail: bool) {
        *self.fail_set_dual_stack.write().await = fail;
    }

    pub fn set_dual_stack_calls(&self) -> u64 {
        self.set_dual_stack_calls.load(Ordering::Relaxed)
    }

    pub fn reapply_calls(&self) -> u64 {
        self.reapply_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl LoadBalancerProvider for MockLoadBalancerProvider {
    async fn describe_load_balancers(&self) -> Result<Vec<LoadBalancer>, DomainError> {
        Ok(self.balancers.read().await.clone())
    }

    async fn set_dual_stack(&self, arn: &str) -> Result<(), DomainError> {
        self.set_dual_stack_calls.fetch_add(1, Ordering::Relaxed);
        if *self.fail_set_dual_stack.read().await {
            return Err(DomainError::Provisioning("permission denied".to_string()));
        }

        let mut balancers = self.balancers.write().await;
        let balancer = balancers
            .iter_mut()
            .find(|b| b.arn == arn)
            .ok_or_else(|| DomainError::NotFound(arn.to_string()))?;
        balancer.ip_address_type = dualstack_domain::IpAddressType::Dualstack;
        Ok(())
    }

    async fn describe_listeners(&self, arn: &str) -> Result<Vec<Listener>, DomainError> {
        Ok(self
            .listeners
            .read()
            .await
            .get(arn)
            .cloned()
            .unwrap_or_default())
    }

    async fn reapply_listener(&self, _listener_arn: &str) -> Result<(), DomainError> {
        self.reapply_calls.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

// ============================================================================
// Builders
// ============================================================================

pub fn net(s: &str) -> Ipv6Network {
    s.parse().unwrap()
}

pub fn public_route_table(id: &str) -> RouteTable {
    RouteTable::new(
        id,
        vec![dualstack_domain::Route::new(
            "0.0.0.0/0",
            Some("igw-abc123".to_string()),
        )],
    )
}

pub fn private_route_table(id: &str) -> RouteTable {
    RouteTable::new(
        id,
        vec![dualstack_domain::Route::new("10.0.0.0/16", None)],
    )
}
