//! Generation configuration.
//!
//! Every field has a built-in default, so an empty YAML document (or no
//! document at all) reproduces the standard dataset. A config file only
//! needs to name the values it changes:
//!
//! ```yaml
//! seed: 7
//! sales_rows: 5000
//! calendar:
//!   days: 90
//! ```
//!
//! Retailer profiles are replaced whole: a profile given in YAML must list
//! all of its fields.

use crate::types::Retailer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Number of store zones every retailer's stores are spread across.
pub const STORE_ZONES: u32 = 4;

/// Error type for configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("SKU universe must contain at least one SKU")]
    EmptySkuUniverse,

    #[error("Calendar must span at least one day")]
    EmptyCalendar,

    /// Share outside [0, 1]; the eligible-subset sample would exceed its population
    #[error("SKU share {share} for {retailer} must be within [0, 1]")]
    ShareOutOfRange { retailer: Retailer, share: f64 },

    #[error("{retailer} is the primary retailer and must carry every SKU (share {share})")]
    PrimaryShare { retailer: Retailer, share: f64 },

    #[error("Promotion probability {value} for {retailer} must be within [0, 1]")]
    InvalidProbability { retailer: Retailer, value: f64 },

    #[error("Sales weight {weight} for {retailer} must be finite and non-negative")]
    InvalidWeight { retailer: Retailer, weight: f64 },

    /// Individually valid weights whose total overflows
    #[error("Sales weights of the sellable retailers sum to {total}, which is not finite")]
    WeightSumOverflow { total: f64 },

    #[error("Units range [{min}, {max}] for {retailer} is empty")]
    InvalidUnitsRange { retailer: Retailer, min: u32, max: u32 },

    /// Sales rows were requested but no retailer can sell anything
    #[error("No retailer has eligible SKUs, stores and a positive sales weight")]
    NoSellableRetailer,
}

/// Per-retailer tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetailerProfile {
    /// Nominal store count. Treated as an upper bound, see [`Self::effective_store_count`].
    pub store_count: u32,

    /// Extra sequence numbers allotted per zone before the list is truncated.
    pub zone_padding: u32,

    /// Fraction of the SKU universe sellable at this retailer.
    pub sku_share: f64,

    /// Relative weight when drawing the retailer for a sales row.
    pub sales_weight: f64,

    /// Inclusive range for units sold per transaction.
    pub units_min: u32,
    pub units_max: u32,

    /// Probability that a SKU carries an active promotion at this retailer.
    pub promo_probability: f64,
}

impl RetailerProfile {
    /// Number of SKUs eligible at this retailer for a universe of `universe` SKUs.
    pub fn eligible_sku_count(&self, universe: usize) -> usize {
        (universe as f64 * self.sku_share).floor() as usize
    }

    /// Number of stores the zone layout actually produces.
    ///
    /// Each zone gets `store_count / zones + zone_padding` sequence numbers and
    /// the concatenated list is truncated to `store_count`, so a small padding
    /// can yield fewer stores than configured.
    pub fn effective_store_count(&self) -> u32 {
        let per_zone = self.store_count / STORE_ZONES + self.zone_padding;
        self.store_count.min(per_zone * STORE_ZONES)
    }
}

/// Profiles for the three retailers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetailerProfiles {
    pub walmart: RetailerProfile,
    pub sams_club: RetailerProfile,
    pub costco: RetailerProfile,
}

impl RetailerProfiles {
    pub fn get(&self, retailer: Retailer) -> &RetailerProfile {
        match retailer {
            Retailer::Walmart => &self.walmart,
            Retailer::SamsClub => &self.sams_club,
            Retailer::Costco => &self.costco,
        }
    }

    pub fn get_mut(&mut self, retailer: Retailer) -> &mut RetailerProfile {
        match retailer {
            Retailer::Walmart => &mut self.walmart,
            Retailer::SamsClub => &mut self.sams_club,
            Retailer::Costco => &mut self.costco,
        }
    }
}

impl Default for RetailerProfiles {
    fn default() -> Self {
        Self {
            walmart: RetailerProfile {
                store_count: 48,
                zone_padding: 3,
                sku_share: 1.0,
                sales_weight: 0.54,
                units_min: 1,
                units_max: 85,
                promo_probability: 0.52,
            },
            sams_club: RetailerProfile {
                store_count: 28,
                zone_padding: 3,
                sku_share: 0.82,
                sales_weight: 0.28,
                units_min: 2,
                units_max: 42,
                promo_probability: 0.76,
            },
            costco: RetailerProfile {
                store_count: 18,
                zone_padding: 2,
                sku_share: 0.58,
                sales_weight: 0.18,
                units_min: 2,
                units_max: 42,
                promo_probability: 0.12,
            },
        }
    }
}

/// The calendar year sales dates and promotions fall in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub year: i32,
    /// Length of the sales window, starting January 1st.
    pub days: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            year: 2024,
            days: 365,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Stores sampled per (SKU, retailer) pair is `stores / 2 + store_sample_extra`,
    /// clamped to the store count.
    pub store_sample_extra: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            store_sample_extra: 6,
        }
    }
}

/// Full generation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Seed for the single random stream every table draws from
    pub seed: u64,

    /// Size of the SKU universe
    pub sku_count: usize,

    /// Number of sales transactions to generate
    pub sales_rows: u64,

    pub calendar: CalendarConfig,

    pub inventory: InventoryConfig,

    pub retailers: RetailerProfiles,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            sku_count: 220,
            sales_rows: 105_000,
            calendar: CalendarConfig::default(),
            inventory: InventoryConfig::default(),
            retailers: RetailerProfiles::default(),
        }
    }
}

impl GenerationConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn profile(&self, retailer: Retailer) -> &RetailerProfile {
        self.retailers.get(retailer)
    }

    /// Whether `retailer` can appear in the sales table.
    pub fn can_sell(&self, retailer: Retailer) -> bool {
        let profile = self.profile(retailer);
        profile.sales_weight > 0.0
            && profile.eligible_sku_count(self.sku_count) > 0
            && profile.effective_store_count() > 0
    }

    /// Check the configuration before any random draw is made.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sku_count == 0 {
            return Err(ConfigError::EmptySkuUniverse);
        }
        if self.calendar.days == 0 {
            return Err(ConfigError::EmptyCalendar);
        }

        for retailer in Retailer::ALL {
            let profile = self.profile(retailer);

            if !(0.0..=1.0).contains(&profile.sku_share) {
                return Err(ConfigError::ShareOutOfRange {
                    retailer,
                    share: profile.sku_share,
                });
            }
            if retailer.is_primary() && profile.sku_share != 1.0 {
                return Err(ConfigError::PrimaryShare {
                    retailer,
                    share: profile.sku_share,
                });
            }
            if !(0.0..=1.0).contains(&profile.promo_probability) {
                return Err(ConfigError::InvalidProbability {
                    retailer,
                    value: profile.promo_probability,
                });
            }
            if !profile.sales_weight.is_finite() || profile.sales_weight < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    retailer,
                    weight: profile.sales_weight,
                });
            }
            if profile.units_min > profile.units_max {
                return Err(ConfigError::InvalidUnitsRange {
                    retailer,
                    min: profile.units_min,
                    max: profile.units_max,
                });
            }
        }

        if self.sales_rows > 0 {
            let sellable: Vec<Retailer> = Retailer::ALL
                .into_iter()
                .filter(|r| self.can_sell(*r))
                .collect();
            if sellable.is_empty() {
                return Err(ConfigError::NoSellableRetailer);
            }
            let total: f64 = sellable
                .iter()
                .map(|r| self.profile(*r).sales_weight)
                .sum();
            if !total.is_finite() {
                return Err(ConfigError::WeightSumOverflow { total });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GenerationConfig::default();
        config.validate().unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.sku_count, 220);
        assert_eq!(config.sales_rows, 105_000);
    }

    #[test]
    fn test_default_eligible_counts() {
        let config = GenerationConfig::default();
        assert_eq!(config.profile(Retailer::Walmart).eligible_sku_count(220), 220);
        assert_eq!(config.profile(Retailer::SamsClub).eligible_sku_count(220), 180);
        assert_eq!(config.profile(Retailer::Costco).eligible_sku_count(220), 127);
    }

    #[test]
    fn test_effective_store_count() {
        let config = GenerationConfig::default();
        assert_eq!(config.profile(Retailer::Walmart).effective_store_count(), 48);
        assert_eq!(config.profile(Retailer::SamsClub).effective_store_count(), 28);
        assert_eq!(config.profile(Retailer::Costco).effective_store_count(), 18);

        let sparse = RetailerProfile {
            store_count: 7,
            zone_padding: 0,
            ..config.profile(Retailer::Costco).clone()
        };
        assert_eq!(sparse.effective_store_count(), 4);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
seed: 7
sales_rows: 500
retailers:
  costco:
    store_count: 18
    zone_padding: 2
    sku_share: 0.4
    sales_weight: 0.18
    units_min: 2
    units_max: 42
    promo_probability: 0.12
"#;
        let config = GenerationConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.sales_rows, 500);
        assert_eq!(config.sku_count, 220);
        assert_eq!(config.retailers.costco.sku_share, 0.4);
        assert_eq!(config.retailers.walmart, RetailerProfiles::default().walmart);
        config.validate().unwrap();
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = GenerationConfig::from_yaml("").unwrap();
        assert_eq!(config, GenerationConfig::default());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sku_count: 10").unwrap();

        let config = GenerationConfig::from_file(file.path()).unwrap();
        assert_eq!(config.sku_count, 10);
    }

    #[test]
    fn test_missing_file() {
        let result = GenerationConfig::from_file("/nonexistent/retail.yaml");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_share_above_one_is_rejected() {
        let mut config = GenerationConfig::default();
        config.retailers.sams_club.sku_share = 1.3;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ShareOutOfRange {
                retailer: Retailer::SamsClub,
                ..
            })
        ));
    }

    #[test]
    fn test_primary_share_must_be_full() {
        let mut config = GenerationConfig::default();
        config.retailers.walmart.sku_share = 0.9;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PrimaryShare { .. })
        ));
    }

    #[test]
    fn test_invalid_probability_and_units() {
        let mut config = GenerationConfig::default();
        config.retailers.costco.promo_probability = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidProbability { .. })
        ));

        let mut config = GenerationConfig::default();
        config.retailers.costco.units_min = 50;
        config.retailers.costco.units_max = 10;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUnitsRange { .. })
        ));
    }

    #[test]
    fn test_weight_sum_overflow() {
        let mut config = GenerationConfig::default();
        config.retailers.walmart.sales_weight = 1e308;
        config.retailers.sams_club.sales_weight = 1e308;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::WeightSumOverflow { .. })
        ));

        // Huge weights are fine while the retailer cannot sell.
        config.retailers.sams_club.sku_share = 0.0;
        config.validate().unwrap();
    }

    #[test]
    fn test_zero_share_is_valid() {
        let mut config = GenerationConfig::default();
        config.retailers.costco.sku_share = 0.0;
        config.validate().unwrap();
        assert!(!config.can_sell(Retailer::Costco));
        assert!(config.can_sell(Retailer::Walmart));
    }

    #[test]
    fn test_no_sellable_retailer() {
        let mut config = GenerationConfig::default();
        config.retailers.walmart.sales_weight = 0.0;
        config.retailers.sams_club.sku_share = 0.0;
        config.retailers.costco.sku_share = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NoSellableRetailer)
        ));

        config.sales_rows = 0;
        config.validate().unwrap();
    }

    #[test]
    fn test_empty_universe() {
        let config = GenerationConfig {
            sku_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptySkuUniverse)
        ));
    }
}
