mod provision_gateway;

pub use provision_gateway::{EgressReport, ProvisionEgressGatewayUseCase, RouteOutcome, RouteStatus};
