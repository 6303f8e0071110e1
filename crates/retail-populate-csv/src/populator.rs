//! CSV populator for the retail tables.

use crate::error::CsvPopulatorError;
use csv::WriterBuilder;
use retail_core::rows::TableRow;
use retail_core::GenerationConfig;
use retail_generator::DataGenerator;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from writing one table.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Table name.
    pub table: &'static str,
    /// File the table was written to.
    pub path: PathBuf,
    /// Number of rows written, header excluded.
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// File name of a table's CSV file, e.g. `Pricing_Promo.csv`.
pub fn table_file_name<T: TableRow>() -> String {
    format!("{}.csv", T::TABLE)
}

/// Write `rows` to `output_path`, header first.
///
/// The header is written explicitly so an empty table still gets one.
pub fn write_table<T: TableRow, P: AsRef<Path>>(
    rows: &[T],
    output_path: P,
) -> Result<PopulateMetrics, CsvPopulatorError> {
    let start_time = Instant::now();
    let output_path = output_path.as_ref();

    let file = File::create(output_path)?;
    let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(buf_writer);

    writer.write_record(T::COLUMNS)?;

    let mut rows_written = 0u64;
    for row in rows {
        writer.serialize(row)?;
        rows_written += 1;

        if rows_written % 10000 == 0 {
            debug!("Written {} {} rows", rows_written, T::TABLE);
        }
    }

    writer.flush()?;
    drop(writer);
    let elapsed = start_time.elapsed();

    Ok(PopulateMetrics {
        table: T::TABLE,
        path: output_path.to_path_buf(),
        rows_written,
        total_duration: elapsed,
        write_duration: elapsed,
        file_size_bytes: std::fs::metadata(output_path)?.len(),
        ..Default::default()
    })
}

/// CSV populator that generates and writes the three tables.
pub struct CsvPopulator {
    generator: DataGenerator,
}

impl CsvPopulator {
    /// Create a new CSV populator.
    ///
    /// The configuration is validated and the reference data built here, so
    /// a bad configuration fails before any file is touched.
    pub fn new(config: GenerationConfig) -> Result<Self, CsvPopulatorError> {
        Ok(Self {
            generator: DataGenerator::new(config)?,
        })
    }

    /// Get a reference to the underlying generator.
    pub fn generator(&self) -> &DataGenerator {
        &self.generator
    }

    /// Generate all tables and write them into `output_dir`.
    ///
    /// The directory is created if missing. Tables are generated in the
    /// order Sales, Inventory, Pricing & Promo.
    pub fn populate_all<P: AsRef<Path>>(
        &mut self,
        output_dir: P,
    ) -> Result<Vec<PopulateMetrics>, CsvPopulatorError> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)?;

        info!(
            "Generating CSV files into '{}' (seed={})",
            output_dir.display(),
            self.generator.config().seed
        );

        let gen_start = Instant::now();
        let sales = self.generator.sales_rows()?;
        let sales_metrics = write_timed(&sales, output_dir, gen_start.elapsed())?;

        let gen_start = Instant::now();
        let inventory = self.generator.inventory_rows()?;
        let inventory_metrics = write_timed(&inventory, output_dir, gen_start.elapsed())?;

        let gen_start = Instant::now();
        let pricing = self.generator.pricing_promo_rows()?;
        let pricing_metrics = write_timed(&pricing, output_dir, gen_start.elapsed())?;

        Ok(vec![sales_metrics, inventory_metrics, pricing_metrics])
    }
}

fn write_timed<T: TableRow>(
    rows: &[T],
    output_dir: &Path,
    generation_duration: Duration,
) -> Result<PopulateMetrics, CsvPopulatorError> {
    let mut metrics = write_table(rows, output_dir.join(table_file_name::<T>()))?;
    metrics.generation_duration = generation_duration;
    metrics.total_duration += generation_duration;

    info!(
        "Wrote {} rows to '{}' ({} bytes, {:.0} rows/sec)",
        metrics.rows_written,
        metrics.path.display(),
        metrics.file_size_bytes,
        metrics.rows_per_second()
    );

    Ok(metrics)
}
