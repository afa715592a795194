mod enable_ipv6;

pub use enable_ipv6::EnableVpcIpv6UseCase;
