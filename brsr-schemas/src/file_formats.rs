use crate::{
    activity::{Scope1Activity, Scope2Activity, Scope3Activity},
    company::CompanyProfile,
};
use serde::Deserialize;

/// On-disk inventory file: the company profile plus one activity record per
/// scope for a single reporting period.
#[derive(Debug, Deserialize)]
pub struct InventoryFile {
    pub schema_version: String,
    #[serde(default)]
    pub company: CompanyProfile,
    #[serde(default)]
    pub scope1: Scope1Activity,
    #[serde(default)]
    pub scope2: Scope2Activity,
    #[serde(default)]
    pub scope3: Scope3Activity,
}
