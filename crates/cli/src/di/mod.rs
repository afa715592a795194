use std::sync::Arc;

use dualstack_application::ports::{LoadBalancerProvider, NetworkProvider};
use dualstack_domain::Config;
use dualstack_infrastructure::{AwsLoadBalancerProvider, AwsNetworkProvider};
use dualstack_runner::RegionReconciler;

/// Region-scoped providers. AWS clients are bound to one region, so a
/// fresh set is built per region iteration.
pub struct Providers {
    pub network: Arc<dyn NetworkProvider>,
    pub load_balancers: Arc<dyn LoadBalancerProvider>,
}

impl Providers {
    pub async fn connect(region: &str) -> Self {
        Self {
            network: Arc::new(AwsNetworkProvider::connect(region).await),
            load_balancers: Arc::new(AwsLoadBalancerProvider::connect(region).await),
        }
    }
}

/// Everything needed to reconcile one region.
pub struct RegionServices {
    pub reconciler: RegionReconciler,
}

impl RegionServices {
    pub async fn connect(region: &str, config: &Config) -> Self {
        let providers = Providers::connect(region).await;

        Self {
            reconciler: RegionReconciler::new(
                providers.network,
                providers.load_balancers,
                config.addressing.subnet_prefix_step,
            ),
        }
    }
}
