use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{EMERGING_THRESHOLD, ENTERPRISE_READY_THRESHOLD};

/// One directory entry describing an AI agent vendor.
///
/// Dataset entries are hand-authored, so every field besides `name` may be
/// absent. Absence maps to empty/false/zero here at the boundary; downstream
/// logic never re-checks for it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Agent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub deployment: Vec<String>,
    #[serde(default)]
    pub sectors: Vec<String>,
    #[serde(default)]
    pub scores: ScoreCard,
    #[serde(default)]
    pub gcc: GccCompliance,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub sentinel_brief: Option<String>,
    #[serde(default)]
    pub recommended_use_case: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub profile_url: Option<String>,
}

/// Raw per-dimension readiness sub-scores.
///
/// A dimension may be missing, null, or a non-numeric value in the data;
/// all of those read as 0 rather than failing the load. Unknown extra keys
/// are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    #[serde(default, deserialize_with = "lenient_score")]
    pub residency_hosting: f64,
    #[serde(default, deserialize_with = "lenient_score")]
    pub arabic_support: f64,
    #[serde(default, deserialize_with = "lenient_score")]
    pub deployment_model: f64,
    #[serde(default, deserialize_with = "lenient_score")]
    pub security_enterprise: f64,
    #[serde(default, deserialize_with = "lenient_score")]
    pub sector_fit: f64,
}

fn lenient_score<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().unwrap_or(0.0))
}

/// Jurisdiction compliance flags. A missing flag is not compliant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GccCompliance {
    #[serde(default)]
    pub uae_compliant: bool,
    #[serde(default)]
    pub saudi_compliant: bool,
    #[serde(default)]
    pub qatar_sovereign_cloud_compatible: bool,
}

/// Dataset envelope. A document without `agents` degrades to an empty
/// directory instead of failing the load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub agents: Vec<Agent>,
}

/// Qualitative readiness bucket derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "Enterprise-Ready")]
    EnterpriseReady,
    #[serde(rename = "Emerging")]
    Emerging,
    #[serde(rename = "Not Ready")]
    NotReady,
}

impl Tier {
    pub fn from_total(total: f64) -> Self {
        if total >= ENTERPRISE_READY_THRESHOLD {
            Tier::EnterpriseReady
        } else if total >= EMERGING_THRESHOLD {
            Tier::Emerging
        } else {
            Tier::NotReady
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::EnterpriseReady => "Enterprise-Ready",
            Tier::Emerging => "Emerging",
            Tier::NotReady => "Not Ready",
        }
    }
}

/// Per-pass annotation pairing an agent with its derived readiness data.
/// Recomputed on every query; never written back to the dataset.
#[derive(Debug, Clone, Copy)]
pub struct RankedAgent<'a> {
    pub agent: &'a Agent,
    pub total: f64,
    pub tier: Tier,
}
