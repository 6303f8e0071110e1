//! Data generator for the retail supply-chain dataset.
//!
//! This crate provides the `DataGenerator` which produces the Sales,
//! Inventory and Pricing & Promo tables. Every random draw comes from one
//! seeded RNG, so the same configuration always yields the same rows.
//!
//! # Architecture
//!
//! ```text
//! GenerationConfig (YAML or defaults)
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │    DataGenerator     │
//! │                      │
//! │  - config            │
//! │  - rng (StdRng)      │
//! │  - ReferenceData ────┼──► SKUs, eligibility, stores
//! └──────────┬───────────┘
//!            │
//!            ├──► tables::sales          ─► Vec<SalesRow>
//!            ├──► tables::inventory      ─► Vec<InventoryRow>
//!            └──► tables::pricing_promo  ─► Vec<PricingPromoRow>
//! ```
//!
//! The table generators are plain functions of the reference data and an
//! `&mut impl Rng`, so they can also be driven with any other random source.
//!
//! # Example
//!
//! ```rust
//! use retail_core::GenerationConfig;
//! use retail_generator::DataGenerator;
//!
//! let config = GenerationConfig {
//!     sku_count: 10,
//!     sales_rows: 100,
//!     ..Default::default()
//! };
//!
//! let mut generator = DataGenerator::new(config).unwrap();
//! let sales = generator.sales_rows().unwrap();
//! assert_eq!(sales.len(), 100);
//! ```

pub mod generator;
pub mod generators;
pub mod reference;
pub mod tables;

// Re-exports for convenience
pub use generator::{DataGenerator, GeneratedTables, GeneratorError};
pub use reference::{region_for_store, ReferenceData, RetailerCatalog};
