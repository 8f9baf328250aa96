//! CSV item table: reads the input records, writes the rated output.
//!
//! Only the `name` column means anything to the ranker. Every other
//! column is opaque and passes through to the output unchanged, with a
//! trailing `rank` column appended.
use std::collections::HashSet;
use std::path::Path;

use bellrank_core::RatingMap;
use tracing::debug;

/// The parsed input CSV: header row plus data rows, in file order.
#[derive(Debug)]
pub struct ItemTable {
    headers: Vec<String>,
    name_column: usize,
    rows: Vec<Vec<String>>,
}

impl ItemTable {
    /// Read and validate an input CSV.
    ///
    /// Fails fast on a non-`.csv` path, a missing `name` column, ragged
    /// rows, empty names, or duplicate names. Nothing is ranked until the
    /// whole file has been validated.
    pub fn from_csv(path: &Path) -> Result<Self, String> {
        check_extension(path, "Input")?;
        debug!(path = %path.display(), "reading item CSV");

        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| format!("Failed to read header row of {}: {e}", path.display()))?
            .iter()
            .map(str::to_string)
            .collect();

        let name_column = headers
            .iter()
            .position(|h| h == "name")
            .ok_or_else(|| format!("Input file {} has no \"name\" column.", path.display()))?;

        let mut rows = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for record in reader.records() {
            let record =
                record.map_err(|e| format!("Malformed record in {}: {e}", path.display()))?;
            let row: Vec<String> = record.iter().map(str::to_string).collect();
            let name = &row[name_column];
            if name.is_empty() {
                return Err(format!(
                    "Empty item name in {} (row {}).",
                    path.display(),
                    rows.len() + 2
                ));
            }
            if !seen.insert(name.clone()) {
                return Err(format!(
                    "Duplicate item name \"{name}\" in {}.",
                    path.display()
                ));
            }
            rows.push(row);
        }

        debug!(items = rows.len(), "item CSV read");
        Ok(ItemTable {
            headers,
            name_column,
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Item names in original input order.
    pub fn names(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row[self.name_column].clone())
            .collect()
    }

    /// Write the rated output CSV: input columns plus a `rank` column.
    ///
    /// Rows come out in original input order. Items absent from the
    /// rating map (dropped by bucket-size rounding) are skipped.
    pub fn write_ranked_csv(&self, path: &Path, ratings: &RatingMap) -> Result<(), String> {
        check_extension(path, "Output")?;
        debug!(path = %path.display(), "writing rated CSV");

        let mut writer = csv::Writer::from_path(path)
            .map_err(|e| format!("Failed to create {}: {e}", path.display()))?;

        let mut header = self.headers.clone();
        header.push("rank".to_string());
        writer
            .write_record(&header)
            .map_err(|e| format!("Failed to write to {}: {e}", path.display()))?;

        for row in &self.rows {
            let name = &row[self.name_column];
            let Some(&bucket) = ratings.get(name) else {
                continue;
            };
            let mut out = row.clone();
            out.push(bucket.to_string());
            writer
                .write_record(&out)
                .map_err(|e| format!("Failed to write to {}: {e}", path.display()))?;
        }

        writer
            .flush()
            .map_err(|e| format!("Failed to write to {}: {e}", path.display()))
    }
}

fn check_extension(path: &Path, role: &str) -> Result<(), String> {
    if path.extension().and_then(|e| e.to_str()) != Some("csv") {
        return Err(format!(
            "{role} file must be a CSV file: {}",
            path.display()
        ));
    }
    Ok(())
}
