//! One-shot export of the computed report: pretty-printed JSON for the BRSR
//! artifact, plus an optional per-source CSV for spreadsheet work.

use crate::error::BrsrError;
use crate::factors::{scope1_factor, scope2_factor, scope3_factor};
use brsr_schemas::{
    activity::{
        sanitize_quantity, Scope1Activity, Scope1Source, Scope2Activity, Scope2Source,
        Scope3Activity, Scope3Source,
    },
    report::CarbonReport,
};
use csv::Writer;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Writes the report as pretty-printed JSON to `path`.
pub fn write_report_json(path: &Path, report: &CarbonReport) -> Result<(), BrsrError> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).map_err(|e| BrsrError::FileIO(path.display().to_string(), e))?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct BreakdownRow {
    scope: &'static str,
    source: &'static str,
    unit: &'static str,
    activity: f64,
    emissions_kg_co2e: f64,
}

/// Writes one CSV row per source across all three scopes, zero quantities
/// included, mirroring the JSON breakdown.
pub fn write_breakdown_csv(
    path: &Path,
    scope1: &Scope1Activity,
    scope2: &Scope2Activity,
    scope3: &Scope3Activity,
) -> Result<(), BrsrError> {
    let csv_err = |e| BrsrError::CsvError(path.display().to_string(), e);
    let mut writer = Writer::from_path(path).map_err(csv_err)?;

    for source in Scope1Source::ALL {
        let quantity = sanitize_quantity(scope1.quantity(source));
        writer
            .serialize(BreakdownRow {
                scope: "scope1",
                source: source.key(),
                unit: source.unit(),
                activity: quantity,
                emissions_kg_co2e: quantity * scope1_factor(source),
            })
            .map_err(csv_err)?;
    }
    for source in Scope2Source::ALL {
        let quantity = sanitize_quantity(scope2.quantity(source));
        writer
            .serialize(BreakdownRow {
                scope: "scope2",
                source: source.key(),
                unit: source.unit(),
                activity: quantity,
                emissions_kg_co2e: quantity * scope2_factor(source),
            })
            .map_err(csv_err)?;
    }
    for source in Scope3Source::ALL {
        let quantity = sanitize_quantity(scope3.quantity(source));
        writer
            .serialize(BreakdownRow {
                scope: "scope3",
                source: source.key(),
                unit: source.unit(),
                activity: quantity,
                emissions_kg_co2e: quantity * scope3_factor(source),
            })
            .map_err(csv_err)?;
    }

    writer
        .flush()
        .map_err(|e| BrsrError::FileIO(path.display().to_string(), e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report;
    use brsr_schemas::company::CompanyProfile;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("brsr_test_{}_{}", std::process::id(), name))
    }

    #[test]
    fn json_export_round_trips_totals() {
        let scope1 = Scope1Activity {
            diesel: 100.0,
            ..Default::default()
        };
        let built = report::build_report(
            &CompanyProfile::default(),
            &scope1,
            &Scope2Activity::default(),
            &Scope3Activity::default(),
        );
        let path = temp_path("report.json");
        write_report_json(&path, &built).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!((value["total"].as_f64().unwrap() - 268.0).abs() < 1e-9);
        assert_eq!(
            value["emissions"]["scope1"]["breakdown"]
                .as_array()
                .unwrap()
                .len(),
            5
        );
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn csv_export_has_one_row_per_source() {
        let path = temp_path("breakdown.csv");
        write_breakdown_csv(
            &path,
            &Scope1Activity::default(),
            &Scope2Activity::default(),
            &Scope3Activity::default(),
        )
        .unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        // Header plus 13 source rows.
        assert_eq!(raw.lines().count(), 14);
        assert!(raw.lines().next().unwrap().contains("emissions_kg_co2e"));
        fs::remove_file(&path).unwrap();
    }
}
