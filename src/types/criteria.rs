use serde::{Deserialize, Serialize};

/// Immutable snapshot of the control values driving one render pass.
///
/// Empty strings mean the filter is unset. An unset criterion passes every
/// agent; it never rejects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub deployment: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub compliance: ComplianceFilter,
    #[serde(default)]
    pub sort: SortMode,
}

/// Jurisdiction selector. Any value outside the three known jurisdictions,
/// including the empty default, passes unconditionally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceFilter {
    Uae,
    Saudi,
    Qatar,
    #[default]
    #[serde(other)]
    Any,
}

impl ComplianceFilter {
    pub fn parse(value: &str) -> Self {
        match value {
            "uae" => ComplianceFilter::Uae,
            "saudi" => ComplianceFilter::Saudi,
            "qatar" => ComplianceFilter::Qatar,
            _ => ComplianceFilter::Any,
        }
    }
}

/// Result ordering. Unknown control values fall back to `Unsorted`, which
/// keeps the filter output in dataset order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    ScoreDesc,
    ScoreAsc,
    NameAsc,
    NameDesc,
    #[default]
    #[serde(other)]
    Unsorted,
}

impl SortMode {
    pub fn parse(value: &str) -> Self {
        match value {
            "score_desc" => SortMode::ScoreDesc,
            "score_asc" => SortMode::ScoreAsc,
            "name_asc" => SortMode::NameAsc,
            "name_desc" => SortMode::NameDesc,
            _ => SortMode::Unsorted,
        }
    }
}
