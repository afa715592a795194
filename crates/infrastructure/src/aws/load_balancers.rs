use async_trait::async_trait;
use aws_sdk_elasticloadbalancingv2::types::IpAddressType as SdkIpAddressType;
use aws_sdk_elasticloadbalancingv2::Client;
use dualstack_application::ports::LoadBalancerProvider;
use dualstack_domain::{DomainError, Listener, LoadBalancer};
use tracing::{error, instrument};

use super::mapping;

/// ELBv2-backed implementation of the load balancer port, scoped to one
/// region.
pub struct AwsLoadBalancerProvider {
    client: Client,
}

impl AwsLoadBalancerProvider {
    pub async fn connect(region: &str) -> Self {
        let config = super::sdk_config(region).await;
        Self {
            client: Client::new(&config),
        }
    }

    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api_error(context: &str, e: impl std::fmt::Display) -> DomainError {
        error!(error = %e, "{context}");
        DomainError::Api(format!("{context}: {e}"))
    }

    fn provisioning_error(context: &str, e: impl std::fmt::Display) -> DomainError {
        error!(error = %e, "{context}");
        DomainError::Provisioning(format!("{context}: {e}"))
    }
}

#[async_trait]
impl LoadBalancerProvider for AwsLoadBalancerProvider {
    #[instrument(skip(self))]
    async fn describe_load_balancers(&self) -> Result<Vec<LoadBalancer>, DomainError> {
        let output = self
            .client
            .describe_load_balancers()
            .send()
            .await
            .map_err(|e| Self::api_error("Failed to describe load balancers", e))?;

        Ok(output
            .load_balancers()
            .iter()
            .map(mapping::load_balancer_from_sdk)
            .collect())
    }

    #[instrument(skip(self))]
    async fn set_dual_stack(&self, arn: &str) -> Result<(), DomainError> {
        self.client
            .set_ip_address_type()
            .load_balancer_arn(arn)
            .ip_address_type(SdkIpAddressType::Dualstack)
            .send()
            .await
            .map_err(|e| Self::provisioning_error("Failed to set dual-stack address type", e))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn describe_listeners(&self, arn: &str) -> Result<Vec<Listener>, DomainError> {
        let output = self
            .client
            .describe_listeners()
            .load_balancer_arn(arn)
            .send()
            .await
            .map_err(|e| Self::api_error("Failed to describe listeners", e))?;

        Ok(output
            .listeners()
            .iter()
            .map(mapping::listener_from_sdk)
            .collect())
    }

    /// Re-reads the listener and re-applies its port, protocol and default
    /// actions unchanged.
    #[instrument(skip(self))]
    async fn reapply_listener(&self, listener_arn: &str) -> Result<(), DomainError> {
        let output = self
            .client
            .describe_listeners()
            .listener_arns(listener_arn)
            .send()
            .await
            .map_err(|e| Self::api_error("Failed to describe listener", e))?;

        let Some(listener) = output.listeners().first() else {
            return Err(DomainError::NotFound(listener_arn.to_string()));
        };

        self.client
            .modify_listener()
            .listener_arn(listener_arn)
            .set_port(listener.port())
            .set_protocol(listener.protocol().cloned())
            .set_default_actions(Some(listener.default_actions().to_vec()))
            .send()
            .await
            .map_err(|e| Self::provisioning_error("Failed to re-apply listener", e))?;

        Ok(())
    }
}
