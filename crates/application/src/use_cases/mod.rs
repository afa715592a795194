pub mod egress;
pub mod instances;
pub mod load_balancers;
pub mod subnets;
pub mod vpc;

// Re-export use cases
pub use egress::{EgressReport, ProvisionEgressGatewayUseCase, RouteOutcome, RouteStatus};
pub use instances::{AssignInstanceAddressesUseCase, AssignedAddresses};
pub use load_balancers::{DualStackReport, EnableDualStackUseCase, LoadBalancerOutcome};
pub use subnets::{AssignSubnetCidrsUseCase, SubnetAssignment};
pub use vpc::EnableVpcIpv6UseCase;
