//! CLI argument definitions for the CSV populator.

use clap::Args;
use retail_core::{ConfigError, GenerationConfig};
use std::path::PathBuf;

/// Arguments that shape what gets generated.
///
/// Every flag is optional; values given here override the config file,
/// which in turn overrides the built-in defaults.
#[derive(Args, Clone, Debug, Default)]
pub struct CommonGenerateArgs {
    /// Path to a YAML generation config
    #[arg(long, short = 'c', env = "RETAIL_DATAGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of sales rows to generate
    #[arg(long)]
    pub sales_rows: Option<u64>,

    /// Size of the SKU universe
    #[arg(long)]
    pub sku_count: Option<usize>,

    /// Dry-run mode: generate and summarize without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

impl CommonGenerateArgs {
    /// Resolve the effective configuration.
    pub fn load_config(&self) -> Result<GenerationConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::from_file(path)?,
            None => GenerationConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(sales_rows) = self.sales_rows {
            config.sales_rows = sales_rows;
        }
        if let Some(sku_count) = self.sku_count {
            config.sku_count = sku_count;
        }

        Ok(config)
    }
}

/// CSV-specific populate arguments.
#[derive(Args, Clone, Debug, Default)]
pub struct CsvPopulateArgs {
    /// Output directory for CSV files (one file per table)
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonGenerateArgs,
}
