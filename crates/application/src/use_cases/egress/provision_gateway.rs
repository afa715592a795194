use dualstack_domain::{DomainError, SubnetClassification};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::ports::NetworkProvider;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteStatus {
    Created,
    AlreadyPresent,
    Failed(String),
}

/// Result of ensuring the default IPv6 route on one route table.
#[derive(Debug, Clone)]
pub struct RouteOutcome {
    pub route_table_id: String,
    pub status: RouteStatus,
}

#[derive(Debug, Clone)]
pub struct EgressReport {
    pub gateway_id: String,
    pub routes: Vec<RouteOutcome>,
}

impl EgressReport {
    pub fn failed_routes(&self) -> usize {
        self.routes
            .iter()
            .filter(|r| matches!(r.status, RouteStatus::Failed(_)))
            .count()
    }
}

/// Ensure one egress-only gateway is attached to the VPC and that every
/// private subnet's route table has a default IPv6 route through it.
///
/// Route creation failures are recorded per table and do not abort the
/// remaining tables.
pub struct ProvisionEgressGatewayUseCase {
    network: Arc<dyn NetworkProvider>,
}

impl ProvisionEgressGatewayUseCase {
    pub fn new(network: Arc<dyn NetworkProvider>) -> Self {
        Self { network }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, vpc_id: &str) -> Result<EgressReport, DomainError> {
        let gateway = self.ensure_gateway(vpc_id).await?;

        let subnets = self.network.describe_subnets(vpc_id).await?;
        let mut routes = Vec::new();

        for subnet in &subnets {
            let Some(table) = self
                .network
                .route_table_for_subnet(&subnet.subnet_id)
                .await?
            else {
                // Unclassifiable: no mutation attempted.
                debug!(subnet_id = %subnet.subnet_id, "No route table associated; skipping");
                continue;
            };

            if table.classification() != SubnetClassification::Private {
                continue;
            }

            if table.has_ipv6_default_route_via(&gateway.gateway_id) {
                routes.push(RouteOutcome {
                    route_table_id: table.route_table_id,
                    status: RouteStatus::AlreadyPresent,
                });
                continue;
            }

            let status = match self
                .network
                .create_ipv6_default_route(&table.route_table_id, &gateway.gateway_id)
                .await
            {
                Ok(()) => {
                    info!(
                        route_table_id = %table.route_table_id,
                        gateway_id = %gateway.gateway_id,
                        "Added default IPv6 route"
                    );
                    RouteStatus::Created
                }
                Err(e) => {
                    warn!(route_table_id = %table.route_table_id, error = %e, "Failed to add route");
                    RouteStatus::Failed(e.to_string())
                }
            };

            routes.push(RouteOutcome {
                route_table_id: table.route_table_id,
                status,
            });
        }

        Ok(EgressReport {
            gateway_id: gateway.gateway_id,
            routes,
        })
    }

    async fn ensure_gateway(
        &self,
        vpc_id: &str,
    ) -> Result<dualstack_domain::EgressOnlyGateway, DomainError> {
        let existing = self
            .network
            .describe_egress_only_gateways()
            .await?
            .into_iter()
            .find(|gw| gw.vpc_id == vpc_id);

        match existing {
            Some(gateway) => {
                info!(gateway_id = %gateway.gateway_id, "Reusing egress-only gateway");
                Ok(gateway)
            }
            None => {
                let gateway = self.network.create_egress_only_gateway(vpc_id).await?;
                info!(gateway_id = %gateway.gateway_id, "Created egress-only gateway");
                Ok(gateway)
            }
        }
    }
}
