//! End-to-end generation tests.
//!
//! Each test generates the three tables into a temporary directory with a
//! fixed seed, reads the CSV files back and checks the cross-table
//! guarantees: eligibility, region mapping, money arithmetic and the
//! promotion rules.

use csv::StringRecord;
use retail_core::{GenerationConfig, Region, Retailer};
use retail_generator::generators::pattern::parse_store_zone;
use retail_generator::ReferenceData;
use retail_populate_csv::CsvPopulator;
use std::collections::HashSet;
use std::path::Path;
use tempfile::TempDir;

fn read_table(path: &Path) -> (StringRecord, Vec<StringRecord>) {
    let mut reader = csv::Reader::from_path(path).expect("Failed to open CSV");
    let headers = reader.headers().unwrap().clone();
    let records = reader.records().map(|r| r.unwrap()).collect();
    (headers, records)
}

fn populate(config: GenerationConfig, dir: &Path) -> ReferenceData {
    let mut populator = CsvPopulator::new(config).expect("config should be valid");
    populator.populate_all(dir).expect("generation should succeed");
    populator.generator().reference().clone()
}

fn retailer_from_name(name: &str) -> Retailer {
    *Retailer::ALL
        .iter()
        .find(|r| r.name() == name)
        .unwrap_or_else(|| panic!("unknown retailer {name}"))
}

fn region_matches_store(region: &str, store: &str) {
    let zone = parse_store_zone(store).expect("generated stores have a zone");
    assert_eq!(region, Region::from_zone(zone).name(), "store {store}");
}

fn f(record: &StringRecord, idx: usize) -> f64 {
    record[idx].parse().unwrap()
}

#[test]
fn test_small_scale_sales() {
    let temp_dir = TempDir::new().unwrap();
    let config = GenerationConfig {
        sku_count: 10,
        sales_rows: 100,
        ..Default::default()
    };
    let reference = populate(config, temp_dir.path());

    let (headers, rows) = read_table(&temp_dir.path().join("Sales.csv"));
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec![
            "Date",
            "SKU",
            "Product Category",
            "Retailer",
            "Store",
            "Region",
            "Units Sold",
            "Revenue",
            "Cost",
            "Gross Margin %"
        ]
    );
    assert_eq!(rows.len(), 100);

    let sku_ids: HashSet<&str> = reference.skus().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(sku_ids.len(), 10);

    for row in &rows {
        assert!(sku_ids.contains(&row[1]), "unknown SKU {}", &row[1]);
        assert!(reference.is_eligible(retailer_from_name(&row[3]), &row[1]));
        region_matches_store(&row[5], &row[4]);

        let units: f64 = f(row, 6);
        let revenue = f(row, 7);
        let cost = f(row, 8);
        let margin = f(row, 9);

        // Unit cost is 48-74% of price, so the open (26, 52) bound is strict
        // only for an unrounded unit cost. Rounding it to cents can push the
        // margin past either edge by up to 0.5 / price points.
        let price = revenue / units;
        let tolerance = 0.5 / price + 0.006;
        assert!(margin > 26.0 - tolerance, "margin {margin} too low");
        assert!(margin < 52.0 + tolerance, "margin {margin} too high");

        let recomputed = (revenue - cost) / revenue * 100.0;
        assert!((recomputed - margin).abs() <= 0.0051);
    }
}

#[test]
fn test_all_tables_respect_eligibility() {
    let temp_dir = TempDir::new().unwrap();
    let config = GenerationConfig {
        sku_count: 30,
        sales_rows: 1000,
        ..Default::default()
    };
    let reference = populate(config, temp_dir.path());

    let (_, inventory) = read_table(&temp_dir.path().join("Inventory.csv"));
    assert!(!inventory.is_empty());
    for row in &inventory {
        assert!(reference.is_eligible(retailer_from_name(&row[1]), &row[0]));
        region_matches_store(&row[3], &row[2]);

        let beginning: i64 = row[4].parse().unwrap();
        let ending: i64 = row[5].parse().unwrap();
        assert!(beginning >= 0);
        assert!(ending >= 0);
    }

    let (_, pricing) = read_table(&temp_dir.path().join("Pricing_Promo.csv"));
    let expected: usize = Retailer::ALL
        .iter()
        .map(|r| reference.eligible_skus(*r).count())
        .sum();
    assert_eq!(pricing.len(), expected);
    for row in &pricing {
        assert!(reference.is_eligible(retailer_from_name(&row[1]), &row[0]));
    }
}

#[test]
fn test_promo_rules_in_output() {
    let temp_dir = TempDir::new().unwrap();
    let config = GenerationConfig {
        sales_rows: 0,
        ..Default::default()
    };
    populate(config, temp_dir.path());

    let (headers, rows) = read_table(&temp_dir.path().join("Pricing_Promo.csv"));
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec![
            "SKU",
            "Retailer",
            "List Price",
            "Promo Price",
            "Promo Start",
            "Promo End",
            "Marketing Spend"
        ]
    );

    let mut promos = 0;
    for row in &rows {
        let list = f(row, 2);
        let promo = f(row, 3);
        let spend = f(row, 6);

        if spend == 0.0 {
            assert_eq!(promo, list);
            assert_eq!(&row[4], "2024-01-01");
            assert_eq!(&row[5], "2024-12-31");
        } else {
            promos += 1;
            assert!(promo < list);
            assert!(spend > 0.0);
        }
    }
    assert!(promos > 0 && promos < rows.len());

    let (_, sales) = read_table(&temp_dir.path().join("Sales.csv"));
    assert!(sales.is_empty());
}

#[test]
fn test_zero_share_retailer_is_absent() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = GenerationConfig {
        sku_count: 20,
        sales_rows: 500,
        ..Default::default()
    };
    config.retailers.get_mut(Retailer::Costco).sku_share = 0.0;
    populate(config, temp_dir.path());

    for file in ["Sales.csv", "Inventory.csv", "Pricing_Promo.csv"] {
        let (headers, rows) = read_table(&temp_dir.path().join(file));
        let col = headers.iter().position(|h| h == "Retailer").unwrap();
        assert!(!rows.is_empty());
        assert!(
            rows.iter().all(|r| &r[col] != "Costco"),
            "Costco row found in {file}"
        );
    }
}

#[test]
fn test_store_sample_clamps_to_store_count() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = GenerationConfig {
        sku_count: 5,
        sales_rows: 0,
        ..Default::default()
    };
    config.inventory.store_sample_extra = 500;
    let reference = populate(config, temp_dir.path());

    let (_, rows) = read_table(&temp_dir.path().join("Inventory.csv"));
    let expected: usize = Retailer::ALL
        .iter()
        .map(|r| reference.eligible_skus(*r).count() * reference.stores(*r).len())
        .sum();
    assert_eq!(rows.len(), expected);
}

#[test]
fn test_same_seed_same_files() {
    let temp_dir = TempDir::new().unwrap();
    let config = GenerationConfig {
        sku_count: 50,
        sales_rows: 2000,
        ..Default::default()
    };

    populate(config.clone(), &temp_dir.path().join("a"));
    populate(config, &temp_dir.path().join("b"));

    for file in ["Sales.csv", "Inventory.csv", "Pricing_Promo.csv"] {
        let a = std::fs::read(temp_dir.path().join("a").join(file)).unwrap();
        let b = std::fs::read(temp_dir.path().join("b").join(file)).unwrap();
        assert_eq!(a, b, "{file} differs between runs");
    }
}
