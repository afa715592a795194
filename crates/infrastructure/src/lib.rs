//! Dualstack Infrastructure Layer
//!
//! AWS adapters for the application ports.
pub mod aws;

pub use aws::{AwsLoadBalancerProvider, AwsNetworkProvider};
