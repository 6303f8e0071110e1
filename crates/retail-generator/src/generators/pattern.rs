//! Identifier patterns for SKUs and stores.
//!
//! SKU ids look like `SKU-HH-00042`; store ids look like `WMT-03-011`, where
//! the middle token is the store's zone.

use retail_core::{Category, Retailer};

/// Build the identifier of the `index`-th SKU (1-based).
pub fn sku_id(category: Category, index: usize) -> String {
    format!("SKU-{}-{index:05}", category.short_code())
}

/// Build a store identifier from its retailer, zone and sequence number.
pub fn store_id(retailer: Retailer, zone: u32, seq: u32) -> String {
    format!("{}-{zone:02}-{seq:03}", retailer.store_prefix())
}

/// Extract the zone number from a store identifier.
///
/// Returns `None` when the prefix is not a known retailer prefix or the zone
/// token is not numeric.
pub fn parse_store_zone(store: &str) -> Option<u32> {
    let mut tokens = store.split('-');
    let prefix = tokens.next()?;
    if !Retailer::ALL.iter().any(|r| r.store_prefix() == prefix) {
        return None;
    }
    tokens.next()?.parse().ok()
}
