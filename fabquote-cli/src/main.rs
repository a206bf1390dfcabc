//! fabquote - CLI tool to price saved fabrication estimates.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use fabquote_core::{
    calculate_document, load_estimate_file, load_settings_file, validate_document,
    EstimateResult, GlobalSettings,
};

/// Price a saved fabrication estimate document.
#[derive(Parser, Debug)]
#[command(name = "fabquote")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input estimate document (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Global settings file (JSON); defaults apply when omitted
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Write the computed breakdown as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Validate only, don't compute
    #[arg(long)]
    validate: bool,

    /// Output the decoded document as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let settings = match &args.settings {
        Some(path) => load_settings_file(path)
            .with_context(|| format!("Failed to load settings {}", path.display()))?,
        None => GlobalSettings::default(),
    };

    info!("Processing: {}", args.input.display());

    let document = load_estimate_file(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    info!(
        "Loaded {} item(s), {} labor day(s)",
        document.items.len(),
        document.days
    );

    // Debug output
    if args.debug {
        let json = serde_json::to_string_pretty(&document)?;
        println!("{}", json);
        return Ok(());
    }

    let validation = validate_document(&document);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let result = calculate_document(&document, &settings);
    print_breakdown(&result);

    if let Some(output_path) = &args.output {
        let json = serde_json::to_string_pretty(&result)?;
        std::fs::write(output_path, json)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        info!("Wrote breakdown: {}", output_path.display());
    }

    Ok(())
}

fn print_breakdown(result: &EstimateResult) {
    println!("{:<12} {:>10} {:>6} {:>12} {:>12}", "Item", "Qty", "Unit", "Unit Price", "Total Price");
    for row in &result.items {
        println!(
            "{:<12} {:>10} {:>6} {:>12} {:>12}",
            row.name, row.quantity, row.unit, row.unit_price, row.total_price
        );
    }
    println!();
    println!("Material cost:      {:>12}", result.material_base_cost);
    println!("Labor cost:         {:>12}", result.labor_cost);
    println!("Total project cost: {:>12}", result.total_project_cost);
    println!("Profit:             {:>12}", result.profit);
    println!("Bill amount:        {:>12}", result.bill_amount);
    println!("Advance required:   {:>12}", result.advance_amount);
}
