use crate::record::LocationBatch;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Where the default run writes its table
pub const DEFAULT_OUTPUT_PATH: &str = "./geo_data.csv";

/// Header row; the first column is the unnamed row index
pub const CSV_HEADER: [&str; 5] = ["", "location", "latitude", "longitude", "type"];

fn optional_field<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Serialize a batch as CSV. Missing values become empty fields.
pub fn write_csv<W: Write>(batch: &LocationBatch, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    for (index, record) in batch.iter().enumerate() {
        csv_writer.write_record([
            index.to_string(),
            record.location.clone(),
            optional_field(record.latitude()),
            optional_field(record.longitude()),
            optional_field(record.place_type()),
        ])?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Write a batch to `path` as CSV, replacing any existing file
pub fn save_csv(batch: &LocationBatch, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(batch, std::io::BufWriter::new(file))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Wrote {} rows to {}", batch.len(), path.display());
    Ok(())
}
