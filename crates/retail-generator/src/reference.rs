//! Reference data shared by all table generators.
//!
//! The SKU universe, per-retailer SKU eligibility and store lists are built
//! once per run and are read-only afterwards. "SKU X is sellable at retailer
//! Y" is answered here and nowhere else.

use crate::generator::GeneratorError;
use crate::generators::pattern::{parse_store_zone, sku_id, store_id};
use rand::Rng;
use retail_core::config::STORE_ZONES;
use retail_core::{Category, GenerationConfig, Region, Retailer, RetailerProfile, Sku};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Order in which the non-primary eligibility subsets are sampled.
const SUBSET_DRAW_ORDER: [Retailer; 2] = [Retailer::Costco, Retailer::SamsClub];

/// What one retailer carries and where.
#[derive(Debug, Clone)]
pub struct RetailerCatalog {
    retailer: Retailer,
    /// Indices into the SKU universe, ascending.
    eligible: Vec<usize>,
    mask: Vec<bool>,
    stores: Vec<String>,
}

impl RetailerCatalog {
    fn new(
        retailer: Retailer,
        universe: usize,
        mut eligible: Vec<usize>,
        stores: Vec<String>,
    ) -> Self {
        eligible.sort_unstable();
        let mut mask = vec![false; universe];
        for &idx in &eligible {
            mask[idx] = true;
        }
        Self {
            retailer,
            eligible,
            mask,
            stores,
        }
    }

    pub fn retailer(&self) -> Retailer {
        self.retailer
    }

    /// Indices of the eligible SKUs, in universe order.
    pub fn eligible_indices(&self) -> &[usize] {
        &self.eligible
    }

    pub fn is_eligible_index(&self, index: usize) -> bool {
        self.mask.get(index).copied().unwrap_or(false)
    }

    pub fn stores(&self) -> &[String] {
        &self.stores
    }
}

/// Immutable universe of SKUs, eligibility subsets and stores.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    skus: Vec<Sku>,
    sku_index: HashMap<String, usize>,
    catalogs: BTreeMap<Retailer, RetailerCatalog>,
}

impl ReferenceData {
    /// Build the reference data, drawing from `rng`.
    ///
    /// Draw order: one category per SKU, then the Costco subset, then the
    /// Sam's Club subset. Store lists are deterministic and draw nothing.
    pub fn build<R: Rng>(config: &GenerationConfig, rng: &mut R) -> Result<Self, GeneratorError> {
        let skus = generate_skus(rng, config.sku_count);
        let universe = skus.len();

        let mut subsets: HashMap<Retailer, Vec<usize>> = HashMap::new();
        for retailer in SUBSET_DRAW_ORDER {
            let amount = config.profile(retailer).eligible_sku_count(universe);
            subsets.insert(retailer, sample_indices(rng, universe, amount, retailer)?);
        }

        let mut catalogs = BTreeMap::new();
        for retailer in Retailer::ALL {
            let eligible = if retailer.is_primary() {
                (0..universe).collect()
            } else {
                subsets.remove(&retailer).unwrap_or_default()
            };
            let stores = build_store_list(retailer, config.profile(retailer));
            debug!(
                "{}: {} eligible SKUs, {} stores",
                retailer,
                eligible.len(),
                stores.len()
            );
            catalogs.insert(
                retailer,
                RetailerCatalog::new(retailer, universe, eligible, stores),
            );
        }

        let sku_index = skus
            .iter()
            .enumerate()
            .map(|(idx, sku)| (sku.id.clone(), idx))
            .collect();

        Ok(Self {
            skus,
            sku_index,
            catalogs,
        })
    }

    /// The whole SKU universe, in generation order.
    pub fn skus(&self) -> &[Sku] {
        &self.skus
    }

    pub fn sku(&self, index: usize) -> Option<&Sku> {
        self.skus.get(index)
    }

    pub fn catalog(&self, retailer: Retailer) -> Option<&RetailerCatalog> {
        self.catalogs.get(&retailer)
    }

    /// SKUs sellable at `retailer`, in universe order.
    pub fn eligible_skus(&self, retailer: Retailer) -> impl Iterator<Item = &Sku> + '_ {
        self.catalog(retailer)
            .map(|c| c.eligible_indices())
            .unwrap_or_default()
            .iter()
            .filter_map(|&idx| self.skus.get(idx))
    }

    pub fn is_eligible(&self, retailer: Retailer, sku_id: &str) -> bool {
        match (self.sku_index.get(sku_id), self.catalog(retailer)) {
            (Some(&idx), Some(catalog)) => catalog.is_eligible_index(idx),
            _ => false,
        }
    }

    /// Store identifiers of `retailer`.
    pub fn stores(&self, retailer: Retailer) -> &[String] {
        self.catalog(retailer).map(|c| c.stores()).unwrap_or_default()
    }
}

/// Region of a store, from the zone token of its identifier.
///
/// Identifiers without a parseable zone get a uniformly random region.
pub fn region_for_store<R: Rng>(store: &str, rng: &mut R) -> Region {
    match parse_store_zone(store) {
        Some(zone) => Region::from_zone(zone),
        None => Region::ALL[rng.gen_range(0..Region::ALL.len())],
    }
}

fn generate_skus<R: Rng>(rng: &mut R, count: usize) -> Vec<Sku> {
    (1..=count)
        .map(|i| {
            let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
            Sku::new(sku_id(category, i), category)
        })
        .collect()
}

/// Sample `amount` distinct indices from `0..population`.
fn sample_indices<R: Rng>(
    rng: &mut R,
    population: usize,
    amount: usize,
    retailer: Retailer,
) -> Result<Vec<usize>, GeneratorError> {
    if amount > population {
        return Err(GeneratorError::SampleExceedsPopulation {
            what: format!("{retailer} SKU subset"),
            requested: amount,
            available: population,
        });
    }
    Ok(rand::seq::index::sample(rng, population, amount).into_vec())
}

/// Store ids laid out zone by zone, truncated to the nominal store count.
fn build_store_list(retailer: Retailer, profile: &RetailerProfile) -> Vec<String> {
    let per_zone = profile.store_count / STORE_ZONES + profile.zone_padding;
    (1..=STORE_ZONES)
        .flat_map(|zone| (1..=per_zone).map(move |seq| store_id(retailer, zone, seq)))
        .take(profile.store_count as usize)
        .collect()
}
