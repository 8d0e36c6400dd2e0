// File: crates/measure-core/src/lib.rs
// Summary: Core library entry point; exports the measurement log model and c3 chart configuration builder.

pub mod error;
pub mod types;
pub mod record;
pub mod loader;
pub mod series;
pub mod axis;
pub mod chart;

pub use error::{ChartError, Result};
pub use types::{Measurement, Unit};
pub use record::{Record, RecordSet};
pub use series::{Cell, Column, SeriesTable};
pub use axis::{AxisSpec, AxisType, Tick, XAxis};
pub use chart::{build_series, ChartConfig, ChartOptions, DataSpec, SeriesBuilder};
