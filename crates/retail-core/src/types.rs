//! Closed domain sets shared by every generated table.
//!
//! Categories, retailers and regions are fixed for the lifetime of the
//! program. Their serialized names are the strings that appear in the CSV
//! output, so the `serde(rename)` attributes here define the wire format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "household")]
    Household,
    #[serde(rename = "personal care")]
    PersonalCare,
    #[serde(rename = "packaged foods")]
    PackagedFoods,
    #[serde(rename = "beverages")]
    Beverages,
    #[serde(rename = "baby care")]
    BabyCare,
    #[serde(rename = "cleaning")]
    Cleaning,
}

impl Category {
    /// All categories, in draw order.
    pub const ALL: [Category; 6] = [
        Category::Household,
        Category::PersonalCare,
        Category::PackagedFoods,
        Category::Beverages,
        Category::BabyCare,
        Category::Cleaning,
    ];

    /// Human-readable label, as written to the output tables.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Household => "household",
            Category::PersonalCare => "personal care",
            Category::PackagedFoods => "packaged foods",
            Category::Beverages => "beverages",
            Category::BabyCare => "baby care",
            Category::Cleaning => "cleaning",
        }
    }

    /// Two-letter code embedded in SKU identifiers.
    pub fn short_code(&self) -> &'static str {
        match self {
            Category::Household => "HH",
            Category::PersonalCare => "PC",
            Category::PackagedFoods => "PF",
            Category::Beverages => "BV",
            Category::BabyCare => "BC",
            Category::Cleaning => "CL",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Retail chain the supplier sells through.
///
/// Walmart is the primary retailer: every SKU is sellable there. The other
/// two carry a sampled subset of the SKU universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Retailer {
    #[serde(rename = "Walmart")]
    Walmart,
    #[serde(rename = "Sam's Club")]
    SamsClub,
    #[serde(rename = "Costco")]
    Costco,
}

impl Retailer {
    /// All retailers, in the order rows are emitted per SKU.
    pub const ALL: [Retailer; 3] = [Retailer::Walmart, Retailer::SamsClub, Retailer::Costco];

    /// The retailer that carries the full SKU universe.
    pub const PRIMARY: Retailer = Retailer::Walmart;

    pub fn name(&self) -> &'static str {
        match self {
            Retailer::Walmart => "Walmart",
            Retailer::SamsClub => "Sam's Club",
            Retailer::Costco => "Costco",
        }
    }

    /// Prefix of this retailer's store identifiers.
    pub fn store_prefix(&self) -> &'static str {
        match self {
            Retailer::Walmart => "WMT",
            Retailer::SamsClub => "SAM",
            Retailer::Costco => "COST",
        }
    }

    pub fn is_primary(&self) -> bool {
        *self == Self::PRIMARY
    }
}

impl fmt::Display for Retailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sales region a store belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Midwest,
    South,
    West,
    Northeast,
}

impl Region {
    /// All regions. Zone `z` maps to `ALL[(z - 1) mod 4]`.
    pub const ALL: [Region; 4] = [Region::Midwest, Region::South, Region::West, Region::Northeast];

    /// Map a store zone number to its region.
    ///
    /// Zones are 1-based; zone 0 wraps around to the last region.
    pub fn from_zone(zone: u32) -> Region {
        let len = Self::ALL.len() as u32;
        Self::ALL[((zone % len + len - 1) % len) as usize]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Region::Midwest => "Midwest",
            Region::South => "South",
            Region::West => "West",
            Region::Northeast => "Northeast",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A stock-keeping unit: unique identifier plus its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sku {
    pub id: String,
    pub category: Category,
}

impl Sku {
    pub fn new(id: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            category,
        }
    }
}
