// File: crates/measure-core/src/series.rs
// Summary: c3 column model: labelled columns of cells and the two-column series table.
// Notes:
// - c3 expects each column as a flat array whose first element is the label,
//   so `Column` serializes as `[label, v0, v1, ...]` rather than as a struct.

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::record::RecordSet;
use crate::types::Measurement;

/// One cell of a column.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    /// Value absent from the record; serialized as `null`.
    Missing,
}

impl From<Option<f64>> for Cell {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Cell::Missing, Cell::Number)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Text(s) => serializer.serialize_str(s),
            // whole numbers go out as integers (82, not 82.0)
            Cell::Number(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 9.0e15 => {
                serializer.serialize_i64(*v as i64)
            }
            Cell::Number(v) => serializer.serialize_f64(*v),
            Cell::Missing => serializer.serialize_none(),
        }
    }
}

/// A labelled column. Contract: `len() == values.len() + 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub label: String,
    pub values: Vec<Cell>,
}

impl Column {
    pub fn new(label: impl Into<String>, values: Vec<Cell>) -> Self {
        Self { label: label.into(), values }
    }

    /// Date column: `label` followed by every record's day label.
    pub fn days(label: impl Into<String>, records: &RecordSet) -> Self {
        Self::new(label, records.iter().map(|r| Cell::from(r.day.as_str())).collect())
    }

    /// Value column: the measurement name followed by each record's value.
    pub fn measurement(records: &RecordSet, measurement: Measurement) -> Self {
        Self::new(
            measurement.name(),
            records.iter().map(|r| Cell::from(r.get(measurement))).collect(),
        )
    }

    /// Length including the label cell.
    pub fn len(&self) -> usize { self.values.len() + 1 }

    /// Never empty: the label cell is always present.
    pub fn is_empty(&self) -> bool { false }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|c| matches!(c, Cell::Missing)).count()
    }
}

impl Serialize for Column {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        seq.serialize_element(&self.label)?;
        for cell in &self.values {
            seq.serialize_element(cell)?;
        }
        seq.end()
    }
}

/// Two-column table: x (dates) then y (measurement values), positionally aligned.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesTable {
    pub x: Column,
    pub y: Column,
}

impl SeriesTable {
    pub fn new(x: Column, y: Column) -> Self {
        Self { x, y }
    }

    pub fn columns(&self) -> [&Column; 2] { [&self.x, &self.y] }

    /// Date/value pairs, skipping the label row.
    pub fn rows(&self) -> impl Iterator<Item = (&Cell, &Cell)> {
        self.x.values.iter().zip(self.y.values.iter())
    }
}

impl Serialize for SeriesTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&self.x)?;
        seq.serialize_element(&self.y)?;
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn column_serializes_flat() {
        let col = Column::new("arm", vec![Cell::Number(29.5), Cell::Number(28.0), Cell::Missing]);
        assert_eq!(serde_json::to_value(&col).unwrap(), json!(["arm", 29.5, 28, null]));
        assert_eq!(col.len(), 4);
        assert_eq!(col.missing_count(), 1);
    }
}
