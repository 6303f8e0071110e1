//! Table generators.
//!
//! Each generator is a function of the shared [`ReferenceData`], the
//! configuration and a random source. None of them reads another's output.

pub mod inventory;
pub mod pricing_promo;
pub mod sales;

use crate::reference::{ReferenceData, RetailerCatalog};
use retail_core::{Retailer, Sku};

/// Every (SKU, retailer) pair where the SKU is sellable, SKU-major.
pub(crate) fn eligible_pairs(
    reference: &ReferenceData,
) -> impl Iterator<Item = (&Sku, &RetailerCatalog)> + '_ {
    reference
        .skus()
        .iter()
        .enumerate()
        .flat_map(move |(idx, sku)| {
            Retailer::ALL
                .into_iter()
                .filter_map(move |retailer| reference.catalog(retailer))
                .filter(move |catalog| catalog.is_eligible_index(idx))
                .map(move |catalog| (sku, catalog))
        })
}
