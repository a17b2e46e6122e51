use serde::{Deserialize, Deserializer, Serialize};

/// Company identity fields as entered by the reporting entity. All free text
/// except revenue; nothing here is validated, the fields are carried verbatim
/// into the exported report.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    pub name: String,
    /// Corporate Identification Number.
    pub cin: String,
    pub sector: String,
    pub employees: String,
    /// Annual revenue in crore INR. `None` means not provided; both `None`
    /// and non-positive values make emission intensity not computable.
    #[serde(deserialize_with = "lenient_revenue")]
    pub revenue: Option<f64>,
}

impl CompanyProfile {
    /// Revenue usable for intensity computation, if any.
    pub fn effective_revenue(&self) -> Option<f64> {
        self.revenue.filter(|r| r.is_finite() && *r > 0.0)
    }
}

/// Revenue may arrive as a number or as free text; anything unparsable is
/// treated as "not provided" rather than an error.
fn lenient_revenue<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawRevenue {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<RawRevenue>::deserialize(deserializer)? {
        Some(RawRevenue::Number(n)) => Some(n),
        Some(RawRevenue::Text(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
