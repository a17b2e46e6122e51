//! Builds the exportable BRSR carbon report from a company profile and its
//! activity records.

use crate::aggregate::{self, EmissionsSummary};
use crate::factors::{scope1_factor, scope2_factor, scope3_factor};
use brsr_schemas::{
    activity::{Scope1Activity, Scope1Source, Scope2Activity, Scope2Source, Scope3Activity, Scope3Source},
    company::CompanyProfile,
    report::{BreakdownEntry, CarbonReport, EmissionsBlock, ScopeReport},
};

pub const REPORT_SCHEMA_VERSION: &str = "1.0";

/// Produces the full report snapshot: company fields verbatim, one breakdown
/// entry per source in every scope (zero quantities included), the three
/// scope totals, grand total, intensity, and a generation date.
pub fn build_report(
    company: &CompanyProfile,
    scope1: &Scope1Activity,
    scope2: &Scope2Activity,
    scope3: &Scope3Activity,
) -> CarbonReport {
    let summary = aggregate::compute(scope1, scope2, scope3, company.effective_revenue());
    let generated_date = chrono::Local::now().format("%d/%m/%Y").to_string();
    assemble(company, scope1, scope2, scope3, &summary, generated_date)
}

fn assemble(
    company: &CompanyProfile,
    scope1: &Scope1Activity,
    scope2: &Scope2Activity,
    scope3: &Scope3Activity,
    summary: &EmissionsSummary,
    generated_date: String,
) -> CarbonReport {
    let scope1_breakdown = Scope1Source::ALL
        .iter()
        .map(|&s| entry(s.key(), scope1.quantity(s), scope1_factor(s)))
        .collect();
    let scope2_breakdown = Scope2Source::ALL
        .iter()
        .map(|&s| entry(s.key(), scope2.quantity(s), scope2_factor(s)))
        .collect();
    let scope3_breakdown = Scope3Source::ALL
        .iter()
        .map(|&s| entry(s.key(), scope3.quantity(s), scope3_factor(s)))
        .collect();

    CarbonReport {
        schema_version: REPORT_SCHEMA_VERSION.to_string(),
        company: company.clone(),
        emissions: EmissionsBlock {
            scope1: ScopeReport {
                total: summary.scope1_kg_co2e,
                breakdown: scope1_breakdown,
            },
            scope2: ScopeReport {
                total: summary.scope2_kg_co2e,
                breakdown: scope2_breakdown,
            },
            scope3: ScopeReport {
                total: summary.scope3_kg_co2e,
                breakdown: scope3_breakdown,
            },
        },
        total: summary.total_kg_co2e,
        intensity: summary.exported_intensity(),
        generated_date,
    }
}

fn entry(key: &str, activity: f64, factor: f64) -> BreakdownEntry {
    let quantity = brsr_schemas::activity::sanitize_quantity(activity);
    BreakdownEntry {
        source: key.to_string(),
        activity: quantity,
        emissions: quantity * factor,
    }
}

/// File name for the exported artifact:
/// `BRSR_Carbon_Report_<company-or-default>_<unix-millis>.json`.
pub fn report_file_name(company_name: &str) -> String {
    let name = if company_name.trim().is_empty() {
        "Company"
    } else {
        company_name.trim()
    };
    format!(
        "BRSR_Carbon_Report_{}_{}.json",
        name,
        chrono::Utc::now().timestamp_millis()
    )
}
