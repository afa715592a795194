use dualstack_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::LoadBalancerProvider;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadBalancerOutcome {
    /// Address type switched; carries the number of listeners re-asserted.
    Enabled { listeners_reasserted: usize },
    AlreadyDualstack,
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct DualStackReport {
    pub outcomes: Vec<(String, LoadBalancerOutcome)>,
}

impl DualStackReport {
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, LoadBalancerOutcome::Failed(_)))
            .count()
    }
}

/// Switch every load balancer in the region to dual-stack addressing.
///
/// An already-dual-stack balancer is a no-op after the check. After the
/// switch, each listener's existing port/protocol/default-action
/// configuration is re-applied unchanged.
pub struct EnableDualStackUseCase {
    load_balancers: Arc<dyn LoadBalancerProvider>,
}

impl EnableDualStackUseCase {
    pub fn new(load_balancers: Arc<dyn LoadBalancerProvider>) -> Self {
        Self { load_balancers }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<DualStackReport, DomainError> {
        let balancers = self.load_balancers.describe_load_balancers().await?;
        let mut report = DualStackReport::default();

        for balancer in balancers {
            let outcome = match self.enable_one(&balancer).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(arn = %balancer.arn, error = %e, "Failed to enable dual-stack");
                    LoadBalancerOutcome::Failed(e.to_string())
                }
            };
            report.outcomes.push((balancer.arn, outcome));
        }

        Ok(report)
    }

    async fn enable_one(
        &self,
        balancer: &dualstack_domain::LoadBalancer,
    ) -> Result<LoadBalancerOutcome, DomainError> {
        let arn = balancer.arn.as_str();
        if balancer.ip_address_type.is_dualstack() {
            info!(arn = %arn, "Load balancer is already dual-stack");
            return Ok(LoadBalancerOutcome::AlreadyDualstack);
        }

        self.load_balancers.set_dual_stack(arn).await?;
        info!(arn = %arn, "Enabled dual-stack");

        let listeners = self.load_balancers.describe_listeners(arn).await?;
        for listener in &listeners {
            self.load_balancers
                .reapply_listener(&listener.listener_arn)
                .await?;
            info!(
                listener_arn = %listener.listener_arn,
                port = listener.port,
                protocol = %listener.protocol,
                "Re-asserted listener"
            );
        }

        Ok(LoadBalancerOutcome::Enabled {
            listeners_reasserted: listeners.len(),
        })
    }
}
