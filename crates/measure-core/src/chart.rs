// File: crates/measure-core/src/chart.rs
// Summary: Chart configuration objects and the series builder that derives them from a record set.

use serde::Serialize;
use tracing::{debug, warn};

use crate::axis::{AxisSpec, AxisType, XAxis};
use crate::record::RecordSet;
use crate::series::{Column, SeriesTable};
use crate::types::{Measurement, DAY_LABEL, TICK_FORMAT};

/// Knobs for configuration building. Defaults reproduce the stock c3 charts.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    /// Label of the date column, also used as `data.x`.
    pub x_label: String,
    pub axis_type: AxisType,
    pub tick_format: String,
    /// Prepended to the measurement name to form `bindto`.
    pub bind_prefix: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            x_label: DAY_LABEL.to_string(),
            axis_type: AxisType::Timeseries,
            tick_format: TICK_FORMAT.to_string(),
            bind_prefix: "#".to_string(),
        }
    }
}

/// The `data` block: which column is x, plus the columns themselves.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DataSpec {
    pub x: String,
    pub columns: SeriesTable,
}

/// One c3 chart configuration, serialized exactly in the shape `c3.generate` accepts.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartConfig {
    /// Measurement the chart plots; not part of the c3 object.
    #[serde(skip)]
    pub measurement: Measurement,
    pub bindto: String,
    pub data: DataSpec,
    pub axis: AxisSpec,
}

impl ChartConfig {
    /// Target element id (`bindto` without a leading `#`).
    pub fn target_id(&self) -> &str {
        self.bindto.strip_prefix('#').unwrap_or(&self.bindto)
    }

    pub fn table(&self) -> &SeriesTable { &self.data.columns }
}

/// Derives chart configurations from a borrowed record set.
/// The date column is computed once and shared by every `build` call.
pub struct SeriesBuilder<'a> {
    records: &'a RecordSet,
    options: ChartOptions,
    days: Column,
}

impl<'a> SeriesBuilder<'a> {
    pub fn new(records: &'a RecordSet) -> Self {
        Self::with_options(records, ChartOptions::default())
    }

    pub fn with_options(records: &'a RecordSet, options: ChartOptions) -> Self {
        let days = Column::days(options.x_label.clone(), records);
        Self { records, options, days }
    }

    pub fn options(&self) -> &ChartOptions { &self.options }

    /// Series table for one measurement: `[day column, value column]`.
    pub fn table(&self, measurement: Measurement) -> SeriesTable {
        let values = Column::measurement(self.records, measurement);
        let missing = values.missing_count();
        if missing > 0 {
            warn!(%measurement, missing, "measurement has missing values");
        }
        SeriesTable::new(self.days.clone(), values)
    }

    /// Chart configuration for one measurement.
    pub fn build(&self, measurement: Measurement) -> ChartConfig {
        debug!(%measurement, records = self.records.len(), "building chart configuration");
        ChartConfig {
            measurement,
            bindto: format!("{}{}", self.options.bind_prefix, measurement.name()),
            data: DataSpec {
                x: self.options.x_label.clone(),
                columns: self.table(measurement),
            },
            axis: AxisSpec {
                x: XAxis::new(self.options.axis_type, self.options.tick_format.clone()),
            },
        }
    }

    /// Configurations for several measurements, in the order given.
    pub fn build_all(&self, measurements: &[Measurement]) -> Vec<ChartConfig> {
        measurements.iter().map(|&m| self.build(m)).collect()
    }
}

/// One-off build with default options.
pub fn build_series(records: &RecordSet, measurement: Measurement) -> ChartConfig {
    SeriesBuilder::new(records).build(measurement)
}
