//! Core types for the retail supply-chain data generator.
//!
//! This crate provides the foundational types shared by the generator and
//! the writers:
//!
//! - [`Category`], [`Retailer`], [`Region`] - the closed sets every row draws from
//! - [`Sku`] - a product identifier paired with its category
//! - [`SalesRow`], [`InventoryRow`], [`PricingPromoRow`] - output records
//! - [`GenerationConfig`] - tunables loaded from YAML, with built-in defaults
//!
//! # Architecture
//!
//! ```text
//! retail-core (this crate)
//!    │
//!    ├─── retail-generator     (reference data + table generators)
//!    │
//!    └─── retail-populate-csv  (writes the three tables to CSV)
//! ```

pub mod config;
pub mod rows;
pub mod types;

pub use config::{
    CalendarConfig, ConfigError, GenerationConfig, InventoryConfig, RetailerProfile,
    RetailerProfiles,
};
pub use rows::{InventoryRow, PricingPromoRow, SalesRow, TableRow};
pub use types::{Category, Region, Retailer, Sku};
