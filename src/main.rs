//! Command-line interface for retail-datagen
//!
//! Generates the retail supply-chain dataset: `Sales.csv`, `Inventory.csv`
//! and `Pricing_Promo.csv`.
//!
//! # Usage Examples
//!
//! ```bash
//! # Standard dataset into the project's data/ directory
//! retail-datagen
//!
//! # Smaller run from a config file, elsewhere
//! retail-datagen --config retail.yaml --sales-rows 5000 -o /tmp/retail
//!
//! # Check a config without writing anything
//! retail-datagen --config retail.yaml --dry-run
//! ```
//!
//! Set `RUST_LOG=retail_generator=debug,retail_populate_csv=info` for progress logs.

use anyhow::Context;
use clap::Parser;
use retail_generator::DataGenerator;
use retail_populate_csv::{CsvPopulateArgs, CsvPopulator};
use std::path::PathBuf;

/// Output directory used when none is given: `data/` at the project root.
const DEFAULT_OUTPUT_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

#[derive(Parser)]
#[command(name = "retail-datagen")]
#[command(about = "Generate a synthetic retail supply-chain dataset")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    args: CsvPopulateArgs,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let args = cli.args;

    let config = args
        .common
        .load_config()
        .context("Failed to load generation config")?;

    println!(
        "Generating retail supply-chain data ({} sales rows, {} SKUs, seed={})...",
        config.sales_rows, config.sku_count, config.seed
    );

    if args.common.dry_run {
        tracing::info!("Running in dry-run mode - no files will be written");
        let mut generator =
            DataGenerator::new(config).context("Invalid generation config")?;
        let tables = generator
            .generate_all()
            .context("Failed to generate tables")?;

        println!("Dry run, nothing written.");
        println!("Sales rows: {}", tables.sales.len());
        println!("Inventory rows: {}", tables.inventory.len());
        println!("Pricing & Promo rows: {}", tables.pricing_promo.len());
        return Ok(());
    }

    let output_dir = args
        .output_dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    tracing::info!("Writing CSV files to {:?} (seed={})", output_dir, config.seed);

    let mut populator = CsvPopulator::new(config).context("Invalid generation config")?;
    let metrics = populator
        .populate_all(&output_dir)
        .with_context(|| format!("Failed to write CSV files to {output_dir:?}"))?;

    for m in &metrics {
        println!("Wrote {} rows to {}", m.rows_written, m.path.display());
    }
    tracing::info!("Generation completed successfully");
    println!("Done.");

    Ok(())
}
