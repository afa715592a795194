use async_trait::async_trait;
use dualstack_domain::{DomainError, Listener, LoadBalancer};

/// Load-balancing control plane of one region.
#[async_trait]
pub trait LoadBalancerProvider: Send + Sync {
    /// All load balancers in this region
    async fn describe_load_balancers(&self) -> Result<Vec<LoadBalancer>, DomainError>;

    /// Switch a load balancer to dual-stack addressing
    async fn set_dual_stack(&self, arn: &str) -> Result<(), DomainError>;

    /// Listeners of a load balancer
    async fn describe_listeners(&self, arn: &str) -> Result<Vec<Listener>, DomainError>;

    /// Re-apply a listener's current port, protocol and default actions
    /// unchanged
    async fn reapply_listener(&self, listener_arn: &str) -> Result<(), DomainError>;
}
