use anyhow::{Context, Result};
use brsr_core::{aggregate, export, factors, report};
use brsr_schemas::activity::{Scope1Source, Scope2Source, Scope3Source};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

mod config;
mod display;
mod plotting;

#[derive(Parser)]
#[command(name = "brsr-app", version, about = "BRSR carbon accounting toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the BRSR carbon report artifacts from an inventory file.
    Report {
        /// Path to the inventory YAML file.
        inventory: PathBuf,
        /// Directory the artifacts are written to.
        #[arg(long, default_value = "./reports")]
        out_dir: PathBuf,
        /// Also write a per-source CSV breakdown.
        #[arg(long)]
        csv: bool,
        /// Also render PNG charts of the computed emissions.
        #[arg(long)]
        chart: bool,
    },
    /// Print the emissions dashboard for an inventory.
    Summary {
        /// Path to the inventory YAML file.
        inventory: PathBuf,
        /// Print the summary as JSON instead of the dashboard.
        #[arg(long)]
        json: bool,
    },
    /// Print the emission factor table.
    Factors,
}

fn main() -> Result<()> {
    println!("--- BRSR Carbon Toolkit ---");

    match Cli::parse().command {
        Command::Report {
            inventory,
            out_dir,
            csv,
            chart,
        } => run_report(&inventory, &out_dir, csv, chart),
        Command::Summary { inventory, json } => run_summary(&inventory, json),
        Command::Factors => {
            print_factors();
            Ok(())
        }
    }
}

fn run_report(inventory_path: &Path, out_dir: &Path, csv: bool, chart: bool) -> Result<()> {
    let inventory = config::Inventory::load(inventory_path)?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    // Copy the inventory file next to the artifacts for traceability
    fs::copy(inventory_path, out_dir.join("inventory.yaml"))?;

    let built = report::build_report(
        &inventory.company,
        &inventory.scope1,
        &inventory.scope2,
        &inventory.scope3,
    );

    let file_name = report::report_file_name(&inventory.company.name);
    export::write_report_json(&out_dir.join(&file_name), &built)?;
    println!("[Report] Wrote '{}'", file_name);

    if csv {
        let csv_path = out_dir.join("emissions_breakdown.csv");
        export::write_breakdown_csv(
            &csv_path,
            &inventory.scope1,
            &inventory.scope2,
            &inventory.scope3,
        )?;
        println!("[Report] Wrote '{}'", csv_path.display());
    }

    if chart {
        plotting::generate_all_charts(out_dir, &built)?;
    }

    print_dashboard(&inventory);
    println!("\nReport generation complete. Artifacts are in '{}'", out_dir.display());
    Ok(())
}

fn run_summary(inventory_path: &Path, json: bool) -> Result<()> {
    let inventory = config::Inventory::load(inventory_path)?;
    let summary = aggregate::compute(
        &inventory.scope1,
        &inventory.scope2,
        &inventory.scope3,
        inventory.company.effective_revenue(),
    );

    if json {
        let value = serde_json::json!({
            "scope1": summary.scope1_kg_co2e,
            "scope2": summary.scope2_kg_co2e,
            "scope3": summary.scope3_kg_co2e,
            "total": summary.total_kg_co2e,
            "intensity": summary.exported_intensity(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print_dashboard(&inventory);
    }
    Ok(())
}

fn print_dashboard(inventory: &config::Inventory) {
    let summary = aggregate::compute(
        &inventory.scope1,
        &inventory.scope2,
        &inventory.scope3,
        inventory.company.effective_revenue(),
    );

    println!("\n--- [Dashboard] Emissions Summary ---");
    if !inventory.company.name.is_empty() {
        println!("Company:             {}", inventory.company.name);
    }
    println!(
        "Scope 1 (direct):    {} kg CO2e",
        display::format_en_in(summary.scope1_kg_co2e)
    );
    println!(
        "Scope 2 (energy):    {} kg CO2e",
        display::format_en_in(summary.scope2_kg_co2e)
    );
    println!(
        "Scope 3 (indirect):  {} kg CO2e",
        display::format_en_in(summary.scope3_kg_co2e)
    );
    println!(
        "Total:               {} kg CO2e",
        display::format_en_in(summary.total_kg_co2e)
    );
    match summary.intensity {
        Some(intensity) => println!(
            "Intensity:           {} kg CO2e / crore INR",
            display::format_en_in(intensity)
        ),
        None => println!("Intensity:           not computable (no revenue provided)"),
    }
}

fn print_factors() {
    println!("\n--- [Factors] Emission factor table (kg CO2e per unit) ---");
    for source in Scope1Source::ALL {
        println!(
            "scope1  {:<12} {:>10} per {}",
            source.key(),
            factors::scope1_factor(source),
            source.unit()
        );
    }
    for source in Scope2Source::ALL {
        println!(
            "scope2  {:<12} {:>10} per {}",
            source.key(),
            factors::scope2_factor(source),
            source.unit()
        );
    }
    for source in Scope3Source::ALL {
        println!(
            "scope3  {:<12} {:>10} per {}",
            source.key(),
            factors::scope3_factor(source),
            source.unit()
        );
    }
}
