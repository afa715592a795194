mod load_balancer_provider;
mod network_provider;

pub use load_balancer_provider::LoadBalancerProvider;
pub use network_provider::NetworkProvider;
