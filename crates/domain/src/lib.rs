//! Dualstack Domain Layer
pub mod config;
pub mod egress_gateway;
pub mod errors;
pub mod instance;
pub mod ipv6_allocator;
pub mod load_balancer;
pub mod route_table;
pub mod subnet;
pub mod vpc;

pub use config::{CliOverrides, Config, ConfigError};
pub use egress_gateway::EgressOnlyGateway;
pub use errors::DomainError;
pub use instance::{Instance, NetworkInterface};
pub use ipv6_allocator::{SubnetBlockAllocator, SUBNET_PREFIX_STEP};
pub use load_balancer::{IpAddressType, Listener, LoadBalancer};
pub use route_table::{classify_subnet, Route, RouteTable, SubnetClassification};
pub use subnet::Subnet;
pub use vpc::Vpc;
