//! Inventory snapshot generator.
//!
//! Quantities are sampled independently of sales: ending inventory is a
//! perturbation of beginning inventory and may exceed it.

use super::eligible_pairs;
use crate::generator::GeneratorError;
use crate::generators::numeric::generate_int_range;
use crate::reference::{region_for_store, ReferenceData};
use rand::Rng;
use retail_core::{GenerationConfig, InventoryRow};
use tracing::debug;

pub const BEGINNING_RANGE: (i64, i64) = (50, 950);
/// Added to beginning inventory to get ending inventory.
pub const ENDING_DELTA: (i64, i64) = (-280, 200);
pub const REORDER_POINT_RANGE: (u32, u32) = (20, 170);
pub const LEAD_TIME_DAYS: (u32, u32) = (3, 14);

/// Stores sampled per (SKU, retailer) pair, clamped to the stores available.
pub fn store_sample_size(store_count: usize, extra: usize) -> usize {
    (store_count / 2).saturating_add(extra).min(store_count)
}

fn clamp_quantity(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Generate one row per sampled store for every eligible (SKU, retailer) pair.
pub fn generate_inventory<R: Rng>(
    reference: &ReferenceData,
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Vec<InventoryRow>, GeneratorError> {
    let mut rows = Vec::new();

    for (sku, catalog) in eligible_pairs(reference) {
        let stores = catalog.stores();
        let amount = store_sample_size(stores.len(), config.inventory.store_sample_extra);

        for store_idx in rand::seq::index::sample(rng, stores.len(), amount) {
            let store = &stores[store_idx];

            let beginning = generate_int_range(rng, BEGINNING_RANGE.0, BEGINNING_RANGE.1);
            let ending = beginning + generate_int_range(rng, ENDING_DELTA.0, ENDING_DELTA.1);
            let reorder_point =
                generate_int_range(rng, REORDER_POINT_RANGE.0, REORDER_POINT_RANGE.1);
            let lead_time_days = generate_int_range(rng, LEAD_TIME_DAYS.0, LEAD_TIME_DAYS.1);
            let region = region_for_store(store, rng);

            rows.push(InventoryRow {
                sku: sku.id.clone(),
                retailer: catalog.retailer(),
                store: store.clone(),
                region,
                beginning_inventory: clamp_quantity(beginning),
                ending_inventory: clamp_quantity(ending),
                reorder_point,
                lead_time_days,
            });
        }
    }

    debug!("Generated {} inventory rows", rows.len());
    Ok(rows)
}
