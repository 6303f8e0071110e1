//! CSV output for the retail supply-chain dataset.
//!
//! This crate writes the Sales, Inventory and Pricing & Promo tables
//! produced by the retail-generator crate, one CSV file per table.
//!
//! # Example
//!
//! ```ignore
//! use retail_core::GenerationConfig;
//! use retail_populate_csv::CsvPopulator;
//!
//! let mut populator = CsvPopulator::new(GenerationConfig::default())?;
//! let metrics = populator.populate_all("data")?;
//! ```

pub mod args;
mod error;
mod populator;

pub use args::{CommonGenerateArgs, CsvPopulateArgs};
pub use error::CsvPopulatorError;
pub use populator::{table_file_name, write_table, CsvPopulator, PopulateMetrics};
