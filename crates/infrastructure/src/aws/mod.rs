mod load_balancers;
pub mod mapping;
mod network;

pub use load_balancers::AwsLoadBalancerProvider;
pub use network::AwsNetworkProvider;

use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Region-scoped SDK configuration; credentials come from the ambient
/// provider chain (env, profile, instance role).
pub async fn sdk_config(region: &str) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await
}
