// Shared directory constants

/// Relative location of the static dataset, fetched once at startup.
pub const DATA_URL: &str = "./data/agents.json";

// Tier thresholds, inclusive at the lower bound.
pub const ENTERPRISE_READY_THRESHOLD: f64 = 18.0;
pub const EMERGING_THRESHOLD: f64 = 11.0;

/// Nominal score ceiling used to scale the readiness bar. The raw total is
/// displayed even when it exceeds this.
pub const MAX_TOTAL_SCORE: f64 = 25.0;

/// Per-group cap on deployment and sector tag chips.
pub const TAG_GROUP_LIMIT: usize = 3;

// Host document element ids.
pub const SEARCH_ID: &str = "search";
pub const CATEGORY_FILTER_ID: &str = "filterCategory";
pub const DEPLOYMENT_FILTER_ID: &str = "filterDeployment";
pub const SECTOR_FILTER_ID: &str = "filterSector";
pub const COMPLIANCE_FILTER_ID: &str = "filterCompliance";
pub const SORT_ID: &str = "sortBy";
pub const GRID_ID: &str = "grid";
pub const COUNT_ID: &str = "count";
pub const UPDATED_ID: &str = "updated";

/// Every control whose change triggers a full re-render.
pub const CONTROL_IDS: [&str; 6] = [
    SEARCH_ID,
    CATEGORY_FILTER_ID,
    DEPLOYMENT_FILTER_ID,
    SECTOR_FILTER_ID,
    COMPLIANCE_FILTER_ID,
    SORT_ID,
];

/// Shown in the count area when the dataset load fails.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading Navigator data.";
