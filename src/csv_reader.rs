// CSV ingestion for the chart pipeline

use anyhow::{anyhow, Context, Result};
use std::io::{self, Read};

use crate::data::{Dataset, Scalar};

/// Read CSV (with a header row) from stdin into a Dataset
pub fn read_csv_from_stdin() -> Result<Dataset> {
    read_csv(io::stdin().lock())
}

/// Read CSV from any reader. Cells stay text — an empty cell is the empty
/// string, which the pipeline keeps distinct from an absent column. Short
/// records are accepted; their missing cells read as absent.
pub fn read_csv<R: Read>(reader: R) -> Result<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .context("Failed to read CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(anyhow!("CSV input has no header row"));
    }

    let mut rows = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let record =
            record.with_context(|| format!("Failed to parse CSV record {}", idx + 1))?;
        rows.push(
            record
                .iter()
                .map(|cell| Scalar::Text(cell.to_string()))
                .collect(),
        );
    }

    Ok(Dataset::new(headers, rows))
}
