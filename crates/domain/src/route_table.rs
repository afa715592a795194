/// Gateway id prefix that marks a standard (bidirectional) internet gateway.
pub const INTERNET_GATEWAY_PREFIX: &str = "igw-";

/// A single route entry. `destination` is the route's CIDR as reported by
/// the provider; `gateway_id` is absent for local and blackhole routes.
#[derive(Debug, Clone)]
pub struct Route {
    pub destination: String,
    pub gateway_id: Option<String>,
}

impl Route {
    pub fn new(destination: impl Into<String>, gateway_id: Option<String>) -> Self {
        Self {
            destination: destination.into(),
            gateway_id,
        }
    }

    fn targets_internet_gateway(&self) -> bool {
        self.gateway_id
            .as_deref()
            .is_some_and(|gw| gw.starts_with(INTERNET_GATEWAY_PREFIX))
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    pub route_table_id: String,
    pub routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(route_table_id: impl Into<String>, routes: Vec<Route>) -> Self {
        Self {
            route_table_id: route_table_id.into(),
            routes,
        }
    }

    /// A subnet behind this table is public iff any route points at an
    /// internet gateway.
    pub fn classification(&self) -> SubnetClassification {
        if self.routes.iter().any(Route::targets_internet_gateway) {
            SubnetClassification::Public
        } else {
            SubnetClassification::Private
        }
    }

    /// True if the table already carries a default IPv6 route through the
    /// given gateway.
    pub fn has_ipv6_default_route_via(&self, gateway_id: &str) -> bool {
        self.routes.iter().any(|r| {
            r.destination == "::/0" && r.gateway_id.as_deref() == Some(gateway_id)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubnetClassification {
    Public,
    Private,
    /// No route table is associated with the subnet; the subnet is skipped,
    /// never defaulted to public or private.
    Unclassifiable,
}

/// Classify a subnet from its associated route table, if any.
pub fn classify_subnet(route_table: Option<&RouteTable>) -> SubnetClassification {
    match route_table {
        Some(table) => table.classification(),
        None => SubnetClassification::Unclassifiable,
    }
}
