// File: crates/measure-core/src/record.rs
// Summary: Dated measurement records, the ordered record set, and optional strict validation.
// Notes:
// - Record order is taken as chronological order. Nothing checks it unless
//   `RecordSet::validate` is called explicitly.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{ChartError, Result};
use crate::types::{Measurement, DAY_FORMAT};

/// One dated measurement snapshot. Values are `None` when the source left them blank.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub day: String,
    pub weight: Option<f64>,
    pub abdomen: Option<f64>,
    pub thigh: Option<f64>,
    pub arm: Option<f64>,
}

impl Record {
    /// Fully populated record.
    pub fn new(day: impl Into<String>, weight: f64, abdomen: f64, thigh: f64, arm: f64) -> Self {
        Self {
            day: day.into(),
            weight: Some(weight),
            abdomen: Some(abdomen),
            thigh: Some(thigh),
            arm: Some(arm),
        }
    }

    /// Record with a date label and no values yet.
    pub fn blank(day: impl Into<String>) -> Self {
        Self { day: day.into(), weight: None, abdomen: None, thigh: None, arm: None }
    }

    pub fn get(&self, measurement: Measurement) -> Option<f64> {
        match measurement {
            Measurement::Weight => self.weight,
            Measurement::Abdomen => self.abdomen,
            Measurement::Thigh => self.thigh,
            Measurement::Arm => self.arm,
        }
    }

    pub fn set(&mut self, measurement: Measurement, value: Option<f64>) {
        let slot = match measurement {
            Measurement::Weight => &mut self.weight,
            Measurement::Abdomen => &mut self.abdomen,
            Measurement::Thigh => &mut self.thigh,
            Measurement::Arm => &mut self.arm,
        };
        *slot = value;
    }

    pub fn with(mut self, measurement: Measurement, value: Option<f64>) -> Self {
        self.set(measurement, value);
        self
    }
}

/// Ordered sequence of records; insertion order is chronological order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// The built-in low-carb diet log (2016-02-26 .. 2016-05-01).
    pub fn builtin() -> Self {
        Self::new(vec![
            Record::new("2016-02-26", 82.0, 92.0, 59.0, 29.5),
            Record::new("2016-03-05", 80.2, 90.0, 57.0, 28.5),
            Record::new("2016-03-12", 80.0, 88.0, 58.0, 28.5),
            Record::new("2016-03-19", 77.9, 90.0, 57.0, 28.5),
            Record::new("2016-03-27", 76.5, 88.0, 58.0, 28.5),
            Record::new("2016-04-03", 76.5, 85.5, 58.0, 28.0),
            Record::new("2016-04-09", 75.5, 84.0, 56.0, 27.5),
            Record::new("2016-04-16", 76.0, 86.0, 57.5, 28.0),
            Record::new("2016-04-23", 74.6, 84.0, 57.0, 27.0),
            Record::new("2016-05-01", 74.3, 83.0, 57.5, 27.5),
        ])
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> { self.records.iter() }

    pub fn records(&self) -> &[Record] { &self.records }

    /// Date labels in record order.
    pub fn days(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.day.as_str()).collect()
    }

    /// Values of one measurement in record order (`None` where missing).
    pub fn values(&self, measurement: Measurement) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.get(measurement)).collect()
    }

    /// Strict check: non-empty, every label is `YYYY-MM-DD`, dates strictly increase.
    pub fn validate(&self) -> Result<()> {
        if self.records.is_empty() {
            return Err(ChartError::EmptyRecordSet);
        }
        let mut previous: Option<(NaiveDate, &str)> = None;
        for (index, record) in self.records.iter().enumerate() {
            let date = NaiveDate::parse_from_str(record.day.trim(), DAY_FORMAT).map_err(|source| {
                ChartError::InvalidDate { index, label: record.day.clone(), source }
            })?;
            if let Some((prev_date, prev_label)) = previous {
                if date <= prev_date {
                    return Err(ChartError::OutOfOrder {
                        index,
                        previous: prev_label.to_string(),
                        current: record.day.clone(),
                    });
                }
            }
            previous = Some((date, record.day.as_str()));
        }
        debug!(records = self.records.len(), "record set validated");
        Ok(())
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_valid_and_ordered() {
        let set = RecordSet::builtin();
        assert_eq!(set.len(), 10);
        set.validate().expect("builtin log validates");
        assert_eq!(set.days().first(), Some(&"2016-02-26"));
        assert_eq!(set.days().last(), Some(&"2016-05-01"));
    }

    #[test]
    fn set_and_get_round_through_enum() {
        let mut r = Record::blank("2016-01-01");
        r.set(Measurement::Thigh, Some(58.0));
        assert_eq!(r.get(Measurement::Thigh), Some(58.0));
        assert_eq!(r.get(Measurement::Arm), None);
    }
}
