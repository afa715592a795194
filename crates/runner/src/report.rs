use chrono::{DateTime, Utc};
use dualstack_application::use_cases::{DualStackReport, EgressReport};
use tracing::info;

/// Outcome of one VPC's reconciliation.
#[derive(Debug, Clone, Default)]
pub struct VpcReport {
    pub vpc_id: String,
    pub ipv6_block: Option<String>,
    pub subnets_assigned: usize,
    pub egress: Option<EgressReport>,
    pub addresses_assigned: usize,
    /// Set when a step aborted the remaining steps of this VPC.
    pub error: Option<String>,
}

impl VpcReport {
    pub fn new(vpc_id: &str) -> Self {
        Self {
            vpc_id: vpc_id.to_string(),
            ..Default::default()
        }
    }

    pub fn succeeded(&self) -> bool {
        self.error.is_none()
            && self.egress.as_ref().map_or(true, |e| e.failed_routes() == 0)
    }
}

/// Outcome of one region.
#[derive(Debug, Clone, Default)]
pub struct RegionReport {
    pub region: String,
    pub vpcs: Vec<VpcReport>,
    pub load_balancers: Option<DualStackReport>,
    pub error: Option<String>,
}

impl RegionReport {
    pub fn new(region: &str) -> Self {
        Self {
            region: region.to_string(),
            ..Default::default()
        }
    }

    fn successes(&self) -> usize {
        let vpc_successes = self.vpcs.iter().filter(|v| v.succeeded()).count();
        let lb_successes = self.load_balancers.as_ref().map_or(0, |lbs| {
            lbs.outcomes.len() - lbs.failed()
        });
        vpc_successes + lb_successes
    }

    fn failures(&self) -> usize {
        let vpc_failures = self.vpcs.iter().filter(|v| !v.succeeded()).count();
        let lb_failures = self
            .load_balancers
            .as_ref()
            .map_or(0, DualStackReport::failed);
        vpc_failures + lb_failures + usize::from(self.error.is_some())
    }
}

/// Aggregated outcome of a whole run, across regions.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub regions: Vec<RegionReport>,
}

impl RunReport {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            regions: Vec::new(),
        }
    }

    pub fn push_region(&mut self, region: RegionReport) {
        self.regions.push(region);
    }

    pub fn successes(&self) -> usize {
        self.regions.iter().map(RegionReport::successes).sum()
    }

    pub fn failures(&self) -> usize {
        self.regions.iter().map(RegionReport::failures).sum()
    }

    /// 0: everything succeeded. 1: partial failure. 2: nothing succeeded.
    pub fn exit_code(&self) -> i32 {
        match (self.successes(), self.failures()) {
            (_, 0) => 0,
            (0, _) => 2,
            _ => 1,
        }
    }

    pub fn log_summary(&self) {
        for region in &self.regions {
            info!(
                region = %region.region,
                vpcs = region.vpcs.len(),
                failures = region.failures(),
                "Region summary"
            );

            for vpc in &region.vpcs {
                info!(
                    vpc_id = %vpc.vpc_id,
                    ipv6_block = vpc.ipv6_block.as_deref().unwrap_or("-"),
                    subnets_assigned = vpc.subnets_assigned,
                    addresses_assigned = vpc.addresses_assigned,
                    error = vpc.error.as_deref().unwrap_or("-"),
                    "VPC summary"
                );
            }
        }

        info!(
            successes = self.successes(),
            failures = self.failures(),
            "Run complete"
        );
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}
