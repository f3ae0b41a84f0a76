use serde::{Deserialize, Serialize};

/// Distinct, sorted option sets backing the three data-driven selectors.
///
/// Built once per dataset load. The implicit "all" option is the host page's
/// initial empty selection and never appears here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub deployments: Vec<String>,
    pub sectors: Vec<String>,
}
