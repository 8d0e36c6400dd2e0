// File: crates/measure-core/src/types.rs
// Summary: Shared types and constants (measurement kinds, units, column labels).

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

/// Label of the shared date column (`data.x` in c3 terms).
pub const DAY_LABEL: &str = "day";
/// Date layout of record labels.
pub const DAY_FORMAT: &str = "%Y-%m-%d";
/// Display pattern for x axis ticks (day/month/year).
pub const TICK_FORMAT: &str = "%d/%m/%Y";

/// Physical unit of a measurement. The data itself does not carry units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Kilograms,
    Centimeters,
}

impl Unit {
    pub const fn symbol(&self) -> &'static str {
        match self {
            Unit::Kilograms => "kg",
            Unit::Centimeters => "cm",
        }
    }
}

/// The closed set of measured attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Measurement {
    Weight,
    Abdomen,
    Thigh,
    Arm,
}

impl Measurement {
    /// All measurements in chart order.
    pub const ALL: [Measurement; 4] = [
        Measurement::Weight,
        Measurement::Abdomen,
        Measurement::Thigh,
        Measurement::Arm,
    ];

    /// Canonical lowercase name; also the column label and chart target id.
    pub const fn name(&self) -> &'static str {
        match self {
            Measurement::Weight => "weight",
            Measurement::Abdomen => "abdomen",
            Measurement::Thigh => "thigh",
            Measurement::Arm => "arm",
        }
    }

    pub const fn unit(&self) -> Unit {
        match self {
            Measurement::Weight => Unit::Kilograms,
            _ => Unit::Centimeters,
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Measurement {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Measurement::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ChartError::UnknownMeasurement(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_loosely() {
        assert_eq!("weight".parse::<Measurement>().unwrap(), Measurement::Weight);
        assert_eq!(" ARM ".parse::<Measurement>().unwrap(), Measurement::Arm);
        assert!(matches!(
            "neck".parse::<Measurement>(),
            Err(ChartError::UnknownMeasurement(name)) if name == "neck"
        ));
    }

    #[test]
    fn units() {
        assert_eq!(Measurement::Weight.unit().symbol(), "kg");
        assert_eq!(Measurement::Thigh.unit(), Unit::Centimeters);
    }
}
