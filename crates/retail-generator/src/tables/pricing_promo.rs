//! Pricing and promotion generator.

use super::eligible_pairs;
use crate::generator::GeneratorError;
use crate::generators::numeric::{generate_float_range, generate_money_range, round_cents};
use crate::generators::timestamp::{generate_promo_window, year_bounds};
use crate::reference::ReferenceData;
use rand::Rng;
use retail_core::{GenerationConfig, PricingPromoRow};
use tracing::debug;

pub const LIST_PRICE_RANGE: (f64, f64) = (3.99, 55.99);
/// Promotion discount as a fraction of the list price.
pub const DISCOUNT_RANGE: (f64, f64) = (0.05, 0.24);
/// Promotions start no later than this month.
pub const LAST_PROMO_START_MONTH: u32 = 10;
pub const PROMO_LENGTH_DAYS: (i64, i64) = (7, 45);
pub const MARKETING_SPEND_RANGE: (f64, f64) = (400.0, 8500.0);

/// Generate one row per eligible (SKU, retailer) pair.
///
/// Whether a promotion runs is a Bernoulli draw with the retailer's
/// `promo_probability`.
pub fn generate_pricing_promo<R: Rng>(
    reference: &ReferenceData,
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Vec<PricingPromoRow>, GeneratorError> {
    let year = config.calendar.year;
    let (year_start, year_end) = year_bounds(year)?;
    let mut rows = Vec::new();

    for (sku, catalog) in eligible_pairs(reference) {
        let retailer = catalog.retailer();
        let list_price = generate_money_range(rng, LIST_PRICE_RANGE.0, LIST_PRICE_RANGE.1);
        let has_promo = rng.gen_bool(config.profile(retailer).promo_probability);

        let row = if has_promo {
            let discount = generate_float_range(rng, DISCOUNT_RANGE.0, DISCOUNT_RANGE.1);
            let promo_price = round_cents(list_price * (1.0 - discount));
            let (promo_start, promo_end) = generate_promo_window(
                rng,
                year,
                LAST_PROMO_START_MONTH,
                PROMO_LENGTH_DAYS.0,
                PROMO_LENGTH_DAYS.1,
            )?;
            let marketing_spend =
                generate_money_range(rng, MARKETING_SPEND_RANGE.0, MARKETING_SPEND_RANGE.1);

            PricingPromoRow {
                sku: sku.id.clone(),
                retailer,
                list_price,
                promo_price,
                promo_start,
                promo_end,
                marketing_spend,
            }
        } else {
            PricingPromoRow {
                sku: sku.id.clone(),
                retailer,
                list_price,
                promo_price: list_price,
                promo_start: year_start,
                promo_end: year_end,
                marketing_spend: 0.0,
            }
        };
        rows.push(row);
    }

    debug!("Generated {} pricing rows", rows.len());
    Ok(rows)
}
