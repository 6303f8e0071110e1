//! Output records for the three generated tables.
//!
//! Field order is column order. Each record serializes with the exact header
//! names downstream dashboards expect.

use crate::types::{Category, Region, Retailer};
use chrono::NaiveDate;
use serde::Serialize;

/// A record type that maps onto one output table.
pub trait TableRow: Serialize {
    /// Table name used in logs and summaries.
    const TABLE: &'static str;
    /// Column headers, in field order.
    const COLUMNS: &'static [&'static str];
}

/// One sales transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesRow {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Product Category")]
    pub category: Category,
    #[serde(rename = "Retailer")]
    pub retailer: Retailer,
    #[serde(rename = "Store")]
    pub store: String,
    #[serde(rename = "Region")]
    pub region: Region,
    #[serde(rename = "Units Sold")]
    pub units_sold: u32,
    #[serde(rename = "Revenue")]
    pub revenue: f64,
    #[serde(rename = "Cost")]
    pub cost: f64,
    #[serde(rename = "Gross Margin %")]
    pub gross_margin_pct: f64,
}

impl TableRow for SalesRow {
    const TABLE: &'static str = "Sales";
    const COLUMNS: &'static [&'static str] = &[
        "Date",
        "SKU",
        "Product Category",
        "Retailer",
        "Store",
        "Region",
        "Units Sold",
        "Revenue",
        "Cost",
        "Gross Margin %",
    ];
}

/// Stock-level snapshot for one SKU at one store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryRow {
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Retailer")]
    pub retailer: Retailer,
    #[serde(rename = "Store")]
    pub store: String,
    #[serde(rename = "Region")]
    pub region: Region,
    #[serde(rename = "Beginning Inventory")]
    pub beginning_inventory: u32,
    #[serde(rename = "Ending Inventory")]
    pub ending_inventory: u32,
    #[serde(rename = "Reorder Point")]
    pub reorder_point: u32,
    #[serde(rename = "Lead Time (days)")]
    pub lead_time_days: u32,
}

impl TableRow for InventoryRow {
    const TABLE: &'static str = "Inventory";
    const COLUMNS: &'static [&'static str] = &[
        "SKU",
        "Retailer",
        "Store",
        "Region",
        "Beginning Inventory",
        "Ending Inventory",
        "Reorder Point",
        "Lead Time (days)",
    ];
}

/// Pricing and promotion window for one SKU at one retailer.
///
/// Without an active promotion the promo price equals the list price, the
/// window covers the whole year and marketing spend is zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingPromoRow {
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Retailer")]
    pub retailer: Retailer,
    #[serde(rename = "List Price")]
    pub list_price: f64,
    #[serde(rename = "Promo Price")]
    pub promo_price: f64,
    #[serde(rename = "Promo Start")]
    pub promo_start: NaiveDate,
    #[serde(rename = "Promo End")]
    pub promo_end: NaiveDate,
    #[serde(rename = "Marketing Spend")]
    pub marketing_spend: f64,
}

impl PricingPromoRow {
    /// Whether this row carries an active promotion.
    pub fn has_promo(&self) -> bool {
        self.marketing_spend > 0.0
    }
}

impl TableRow for PricingPromoRow {
    const TABLE: &'static str = "Pricing_Promo";
    const COLUMNS: &'static [&'static str] = &[
        "SKU",
        "Retailer",
        "List Price",
        "Promo Price",
        "Promo Start",
        "Promo End",
        "Marketing Spend",
    ];
}
