use std::fmt;

use serde::{Deserialize, Serialize};

/// The category a measurement belongs to.
///
/// Each kind has exactly one canonical unit; all computation happens on
/// values expressed in that unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementKind {
    /// Volumetric flow rate, canonically gallons per minute.
    Flow,
    /// Bed volume, canonically gallons.
    Volume,
    /// Linear dimension, canonically feet.
    Length,
}

impl MeasurementKind {
    /// The canonical unit token for this kind.
    #[must_use]
    pub const fn canonical_unit(self) -> &'static str {
        match self {
            Self::Flow => "gpm",
            Self::Volume => "gal",
            Self::Length => "ft",
        }
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Flow => "flow",
            Self::Volume => "volume",
            Self::Length => "length",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::MeasurementKind;

    #[test]
    fn one_canonical_unit_per_kind() {
        assert_eq!(MeasurementKind::Flow.canonical_unit(), "gpm");
        assert_eq!(MeasurementKind::Volume.canonical_unit(), "gal");
        assert_eq!(MeasurementKind::Length.canonical_unit(), "ft");
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(MeasurementKind::Flow.to_string(), "flow");
        assert_eq!(MeasurementKind::Length.to_string(), "length");
    }
}
