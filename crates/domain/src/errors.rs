use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Provider rejected provisioning request: {0}")]
    Provisioning(String),

    #[error("IPv6 allocation exhausted: {0}")]
    AllocationExhausted(String),

    #[error("Invalid CIDR: {0}")]
    InvalidCidr(String),

    #[error("Cloud API error: {0}")]
    Api(String),

    #[error("Resource not found: {0}")]
    NotFound(String),
}
