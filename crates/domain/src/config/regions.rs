use serde::{Deserialize, Serialize};

/// Region selection
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegionsConfig {
    /// Regions to reconcile, in order
    #[serde(default)]
    pub names: Vec<String>,

    /// Discover and process every region the account can see instead of
    /// using `names` (default: false)
    #[serde(default)]
    pub discover_all: bool,
}
