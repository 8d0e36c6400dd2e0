// File: crates/measure-core/src/loader.rs
// Summary: Loads substitute record sets from CSV (header row: day plus any measurement columns).

use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{ChartError, Result};
use crate::record::{Record, RecordSet};
use crate::types::{Measurement, DAY_LABEL};

/// Accepted header names for the date column.
const DAY_HEADERS: &[&str] = &[DAY_LABEL, "date"];

impl RecordSet {
    /// Load a record set from a CSV file on disk.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)?;
        debug!(path = %path.display(), "loading records");
        read_records(rdr)
    }

    /// Load a record set from any CSV byte stream.
    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<Self> {
        let rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        read_records(rdr)
    }
}

fn read_records<R: io::Read>(mut rdr: csv::Reader<R>) -> Result<RecordSet> {
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    let i_day = headers
        .iter()
        .position(|h| DAY_HEADERS.contains(&h.as_str()))
        .ok_or_else(|| ChartError::MissingColumn(DAY_LABEL.to_string()))?;

    let mut columns: Vec<(usize, Measurement)> = Vec::new();
    for (i, h) in headers.iter().enumerate() {
        if i == i_day {
            continue;
        }
        match h.parse::<Measurement>() {
            Ok(m) => columns.push((i, m)),
            Err(_) => warn!(column = %h, "ignoring unrecognised CSV column"),
        }
    }

    let mut set = RecordSet::default();
    for rec in rdr.records() {
        let rec = rec?;
        let line = rec.position().map(|p| p.line()).unwrap_or_default();
        let mut record = Record::blank(rec.get(i_day).unwrap_or_default());
        for &(i, m) in &columns {
            let raw = rec.get(i).unwrap_or_default();
            let value = if raw.is_empty() {
                None
            } else {
                // NaN/inf parse as f64 but have no JSON form
                let v = raw.parse::<f64>().ok().filter(|v| v.is_finite()).ok_or_else(|| {
                    ChartError::InvalidValue { line, column: m.name().to_string(), value: raw.to_string() }
                })?;
                Some(v)
            };
            record.set(m, value);
        }
        set.push(record);
    }
    debug!(records = set.len(), columns = columns.len(), "records loaded");
    Ok(set)
}
