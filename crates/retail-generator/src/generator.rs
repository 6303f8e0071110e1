//! Main data generator for producing the three tables.

use crate::reference::ReferenceData;
use crate::tables;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use retail_core::{
    ConfigError, GenerationConfig, InventoryRow, PricingPromoRow, Retailer, SalesRow,
};
use tracing::info;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Configuration rejected before generation started
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A mandatory sample is larger than the population it is drawn from
    #[error("Cannot sample {requested} items for {what}: only {available} available")]
    SampleExceedsPopulation {
        what: String,
        requested: usize,
        available: usize,
    },

    /// A retailer was drawn for a sales row but has nothing to sell
    #[error("{0} has no eligible SKUs or no stores")]
    NothingToSell(Retailer),

    #[error("Invalid calendar date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Date {start} plus {days} days is out of range")]
    DateOverflow { start: NaiveDate, days: i64 },
}

/// All three tables from one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedTables {
    pub sales: Vec<SalesRow>,
    pub inventory: Vec<InventoryRow>,
    pub pricing_promo: Vec<PricingPromoRow>,
}

/// Data generator that produces deterministic retail tables.
///
/// The generator owns a single seeded random stream. Reference data is drawn
/// from it first, then each table in the order its method is called, so
/// calling the methods in the same order with the same configuration always
/// reproduces the same rows.
pub struct DataGenerator {
    config: GenerationConfig,
    reference: ReferenceData,
    rng: StdRng,
}

impl DataGenerator {
    /// Validate `config`, seed the RNG from `config.seed` and build the
    /// reference data.
    pub fn new(config: GenerationConfig) -> Result<Self, GeneratorError> {
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let reference = ReferenceData::build(&config, &mut rng)?;

        info!(
            "Built reference data: {} SKUs (seed={})",
            reference.skus().len(),
            config.seed
        );

        Ok(Self {
            config,
            reference,
            rng,
        })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Generate `config.sales_rows` sales transactions.
    pub fn sales_rows(&mut self) -> Result<Vec<SalesRow>, GeneratorError> {
        tables::sales::generate_sales(&self.reference, &self.config, &mut self.rng)
    }

    /// Generate inventory snapshots for every eligible (SKU, retailer) pair.
    pub fn inventory_rows(&mut self) -> Result<Vec<InventoryRow>, GeneratorError> {
        tables::inventory::generate_inventory(&self.reference, &self.config, &mut self.rng)
    }

    /// Generate pricing and promotion rows for every eligible (SKU, retailer) pair.
    pub fn pricing_promo_rows(&mut self) -> Result<Vec<PricingPromoRow>, GeneratorError> {
        tables::pricing_promo::generate_pricing_promo(&self.reference, &self.config, &mut self.rng)
    }

    /// Generate all three tables: sales, then inventory, then pricing.
    pub fn generate_all(&mut self) -> Result<GeneratedTables, GeneratorError> {
        let sales = self.sales_rows()?;
        let inventory = self.inventory_rows()?;
        let pricing_promo = self.pricing_promo_rows()?;

        info!(
            "Generated {} sales, {} inventory and {} pricing rows",
            sales.len(),
            inventory.len(),
            pricing_promo.len()
        );

        Ok(GeneratedTables {
            sales,
            inventory,
            pricing_promo,
        })
    }
}
