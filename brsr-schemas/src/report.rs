use crate::company::CompanyProfile;
use serde::{Deserialize, Serialize};

/// One line of a scope breakdown: a source key, the recorded activity
/// quantity, and the emissions attributed to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub source: String,
    pub activity: f64,
    pub emissions: f64,
}

/// Per-scope section of the report: the scope total plus one breakdown entry
/// for every source in the scope, zero-quantity sources included, so the
/// artifact is auditable without the factor table at hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeReport {
    pub total: f64,
    pub breakdown: Vec<BreakdownEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionsBlock {
    pub scope1: ScopeReport,
    pub scope2: ScopeReport,
    pub scope3: ScopeReport,
}

/// The exported BRSR carbon report. Field names follow the published
/// artifact schema (camelCase keys, kg CO2e throughout).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonReport {
    pub schema_version: String,
    pub company: CompanyProfile,
    pub emissions: EmissionsBlock,
    /// Grand total, kg CO2e.
    pub total: f64,
    /// kg CO2e per crore INR revenue; 0 when revenue is absent or zero.
    pub intensity: f64,
    pub generated_date: String,
}
