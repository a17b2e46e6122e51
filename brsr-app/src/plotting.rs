//! This module is responsible for generating visualizations of a computed
//! carbon report.

use anyhow::Result;
use brsr_schemas::report::{BreakdownEntry, CarbonReport};
use plotters::prelude::*;
use std::path::Path;

/// The main function to generate and save all charts for a report.
pub fn generate_all_charts(output_dir: &Path, report: &CarbonReport) -> Result<()> {
    println!("[Plotting] Generating charts from the computed report...");

    plot_scope_totals(output_dir, report)?;
    plot_source_breakdown(output_dir, report)?;

    println!(
        "[Plotting] Charts have been saved to '{}'.",
        output_dir.display()
    );
    Ok(())
}

/// Bar chart of the three scope totals.
fn plot_scope_totals(output_dir: &Path, report: &CarbonReport) -> Result<()> {
    let path = output_dir.join("1_scope_totals.png");
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let scopes = [
        ("Scope 1", report.emissions.scope1.total),
        ("Scope 2", report.emissions.scope2.total),
        ("Scope 3", report.emissions.scope3.total),
    ];
    let max_emissions = scopes
        .iter()
        .map(|(_, v)| *v)
        .fold(0.0, f64::max)
        .max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Emissions by Scope", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d((0i32..3i32).into_segmented(), 0f64..max_emissions * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Scope")
        .y_desc("Emissions (kg CO2e)")
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) if (0..3).contains(i) => scopes[*i as usize].0.to_string(),
            _ => String::new(),
        })
        .draw()?;

    let colors = [RED, BLUE, GREEN];
    chart.draw_series(scopes.iter().enumerate().map(|(i, (_, value))| {
        Rectangle::new(
            [
                (SegmentValue::Exact(i as i32), 0.0),
                (SegmentValue::Exact(i as i32 + 1), *value),
            ],
            colors[i % colors.len()].filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}

/// Bar chart of every emission source across the three scopes.
fn plot_source_breakdown(output_dir: &Path, report: &CarbonReport) -> Result<()> {
    let path = output_dir.join("2_source_breakdown.png");
    let root = BitMapBackend::new(&path, (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let entries: Vec<&BreakdownEntry> = report
        .emissions
        .scope1
        .breakdown
        .iter()
        .chain(report.emissions.scope2.breakdown.iter())
        .chain(report.emissions.scope3.breakdown.iter())
        .collect();
    let max_emissions = entries
        .iter()
        .map(|e| e.emissions)
        .fold(0.0, f64::max)
        .max(1.0);
    let count = entries.len() as i32;

    let mut chart = ChartBuilder::on(&root)
        .caption("Emissions by Source", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d((0i32..count).into_segmented(), 0f64..max_emissions * 1.1)?;

    let labels: Vec<String> = entries.iter().map(|e| e.source.clone()).collect();
    chart
        .configure_mesh()
        .x_desc("Source")
        .y_desc("Emissions (kg CO2e)")
        .x_labels(entries.len())
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) if (*i as usize) < labels.len() => {
                labels[*i as usize].clone()
            }
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(entries.iter().enumerate().map(|(i, entry)| {
        Rectangle::new(
            [
                (SegmentValue::Exact(i as i32), 0.0),
                (SegmentValue::Exact(i as i32 + 1), entry.emissions),
            ],
            GREEN.filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}
