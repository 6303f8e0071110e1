//! Sales transaction generator.

use crate::generator::GeneratorError;
use crate::generators::numeric::{
    generate_float_range, generate_int_range, generate_money_range, margin_pct, round_cents,
};
use crate::generators::timestamp::{date, generate_date_in_window};
use crate::reference::{region_for_store, ReferenceData};
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use retail_core::{ConfigError, GenerationConfig, Retailer, SalesRow};
use tracing::debug;

/// Unit shelf price range.
pub const PRICE_RANGE: (f64, f64) = (2.99, 62.99);

/// Unit cost as a fraction of the unit price.
pub const UNIT_COST_FACTOR: (f64, f64) = (0.48, 0.74);

/// Money columns of one transaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaleAmounts {
    pub revenue: f64,
    pub cost: f64,
    pub margin_pct: f64,
}

impl SaleAmounts {
    /// Totals for `units` sold at `price` with the given `unit_cost`, each
    /// rounded to cents.
    pub fn compute(units: u32, price: f64, unit_cost: f64) -> Self {
        let revenue = round_cents(f64::from(units) * price);
        let cost = round_cents(f64::from(units) * unit_cost);
        Self {
            revenue,
            cost,
            margin_pct: margin_pct(revenue, cost),
        }
    }
}

/// Generate `config.sales_rows` transactions.
///
/// Retailers that cannot sell (empty SKU subset, no stores or zero weight)
/// are left out of the weighted retailer draw.
pub fn generate_sales<R: Rng>(
    reference: &ReferenceData,
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Vec<SalesRow>, GeneratorError> {
    let count = config.sales_rows;
    let mut rows = Vec::with_capacity(count as usize);
    if count == 0 {
        return Ok(rows);
    }

    let sellable: Vec<Retailer> = Retailer::ALL
        .into_iter()
        .filter(|r| config.can_sell(*r))
        .collect();
    let weights = sellable.iter().map(|r| config.profile(*r).sales_weight);
    let retailer_dist =
        WeightedIndex::new(weights).map_err(|_| ConfigError::NoSellableRetailer)?;

    let window_start = date(config.calendar.year, 1, 1)?;

    for i in 0..count {
        let retailer = sellable[retailer_dist.sample(rng)];
        let profile = config.profile(retailer);
        let catalog = reference
            .catalog(retailer)
            .ok_or(GeneratorError::NothingToSell(retailer))?;

        let sku = catalog
            .eligible_indices()
            .choose(rng)
            .and_then(|&idx| reference.sku(idx))
            .ok_or(GeneratorError::NothingToSell(retailer))?;
        let store = catalog
            .stores()
            .choose(rng)
            .ok_or(GeneratorError::NothingToSell(retailer))?;
        let region = region_for_store(store, rng);

        let units = generate_int_range(rng, profile.units_min, profile.units_max).max(1);
        let price = generate_money_range(rng, PRICE_RANGE.0, PRICE_RANGE.1);
        let cost_factor = generate_float_range(rng, UNIT_COST_FACTOR.0, UNIT_COST_FACTOR.1);
        let unit_cost = round_cents(price * cost_factor);
        let amounts = SaleAmounts::compute(units, price, unit_cost);

        let sale_date = generate_date_in_window(rng, window_start, config.calendar.days)?;

        rows.push(SalesRow {
            date: sale_date,
            sku: sku.id.clone(),
            category: sku.category,
            retailer,
            store: store.clone(),
            region,
            units_sold: units,
            revenue: amounts.revenue,
            cost: amounts.cost,
            gross_margin_pct: amounts.margin_pct,
        });

        if (i + 1) % 10_000 == 0 {
            debug!("Generated {} sales rows", i + 1);
        }
    }

    Ok(rows)
}
