/// An egress-only internet gateway and the VPC it is attached to.
#[derive(Debug, Clone)]
pub struct EgressOnlyGateway {
    pub gateway_id: String,
    pub vpc_id: String,
}

impl EgressOnlyGateway {
    pub fn new(gateway_id: impl Into<String>, vpc_id: impl Into<String>) -> Self {
        Self {
            gateway_id: gateway_id.into(),
            vpc_id: vpc_id.into(),
        }
    }
}
