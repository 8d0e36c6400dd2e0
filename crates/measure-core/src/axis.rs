// File: crates/measure-core/src/axis.rs
// Summary: Axis directives for the c3 `axis` block (x axis type and tick format).

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    /// Date-typed axis; x values are parsed as dates.
    Timeseries,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tick {
    pub format: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct XAxis {
    #[serde(rename = "type")]
    pub kind: AxisType,
    pub tick: Tick,
}

impl XAxis {
    pub fn new(kind: AxisType, format: impl Into<String>) -> Self {
        Self { kind, tick: Tick { format: format.into() } }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AxisSpec {
    pub x: XAxis,
}
