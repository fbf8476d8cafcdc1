//! CSV Import / Export
//!
//! Entries travel as `name,date,weight,unit,height,category` rows. On import every row goes
//! through the same validation as the form, so the category column is recomputed rather than
//! trusted.

use std::io::{Read, Write};
use std::path::Path;

use thiserror::Error;

use crate::tracker::{DraftField, Entry, EntryDraft, WeightUnit};

/// CSV errors
#[derive(Error, Debug)]
pub enum CsvError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column: {0}")]
    MissingColumn(&'static str),
}

/// Header written by [`export`]
pub const HEADER: [&str; 6] = ["name", "date", "weight", "unit", "height", "category"];

/// Write entries as CSV
pub fn export<W: Write>(entries: &[Entry], writer: W) -> Result<usize, CsvError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for entry in entries {
        wtr.write_record([
            entry.name.clone(),
            entry.date.to_string(),
            entry.weight.to_string(),
            entry.unit.to_string(),
            entry.height.to_string(),
            entry.category.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(entries.len())
}

/// Result of a CSV import
#[derive(Debug, Default)]
pub struct CsvImportResult {
    pub entries: Vec<Entry>,
    pub rows_processed: usize,
    pub rows_failed: usize,
    pub errors: Vec<String>,
}

/// Column positions resolved from the header row
struct Columns {
    name: usize,
    date: usize,
    weight: usize,
    height: usize,
    unit: Option<usize>,
}

impl Columns {
    fn detect(headers: &csv::StringRecord) -> Result<Self, CsvError> {
        let find = |wanted: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(wanted))
        };

        Ok(Self {
            name: find("name").ok_or(CsvError::MissingColumn("name"))?,
            date: find("date").ok_or(CsvError::MissingColumn("date"))?,
            weight: find("weight").ok_or(CsvError::MissingColumn("weight"))?,
            height: find("height").ok_or(CsvError::MissingColumn("height"))?,
            unit: find("unit"),
        })
    }
}

/// Read and validate entries from CSV
///
/// Rows without a unit column (or with an empty cell) use `default_unit`.
pub fn import<R: Read>(reader: R, default_unit: WeightUnit) -> Result<CsvImportResult, CsvError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let columns = Columns::detect(rdr.headers()?)?;

    let mut result = CsvImportResult::default();

    for (idx, record) in rdr.records().enumerate() {
        // Header is line 1
        let line = idx + 2;
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                result.rows_failed += 1;
                result.errors.push(format!("Line {}: {}", line, e));
                continue;
            }
        };

        let field = |i: usize| record.get(i).unwrap_or_default();

        let unit = match columns.unit.map(field).filter(|s| !s.is_empty()) {
            Some(raw) => match raw.parse::<WeightUnit>() {
                Ok(u) => u,
                Err(e) => {
                    result.rows_failed += 1;
                    result.errors.push(format!("Line {}: {}", line, e));
                    continue;
                }
            },
            None => default_unit,
        };

        let draft = EntryDraft::default()
            .with(DraftField::Name, field(columns.name))
            .with(DraftField::Date, field(columns.date))
            .with(DraftField::Weight, field(columns.weight))
            .with(DraftField::Height, field(columns.height))
            .unit(unit);

        match draft.validate() {
            Ok(entry) => {
                result.entries.push(entry);
                result.rows_processed += 1;
            }
            Err(e) => {
                result.rows_failed += 1;
                result.errors.push(format!("Line {}: {}", line, e));
            }
        }
    }

    tracing::debug!(
        "CSV import: {} rows ok, {} failed",
        result.rows_processed,
        result.rows_failed
    );
    Ok(result)
}

/// Import from a file path
pub fn import_path(path: &Path, default_unit: WeightUnit) -> Result<CsvImportResult, CsvError> {
    let file = std::fs::File::open(path)?;
    import(file, default_unit)
}
