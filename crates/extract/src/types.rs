use ebct_units::MeasurementKind;
use serde::{Deserialize, Serialize};

/// A numeric value/unit pair found in the input text.
///
/// Immutable once extracted. `offset` is the byte index of the match in the
/// original text; it is kept for diagnostics and ordering, never for
/// computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Numeric value as written (unsigned decimal, optional fraction).
    pub value: f64,

    /// Matched unit token, lowercased (e.g. `gpm`, `m³/h`).
    pub unit: String,

    /// Measurement category.
    pub kind: MeasurementKind,

    /// Byte offset of the match in the original text.
    pub offset: usize,
}

impl Measurement {
    #[must_use]
    pub fn new(value: f64, unit: impl Into<String>, kind: MeasurementKind, offset: usize) -> Self {
        Self {
            value,
            unit: unit.into(),
            kind,
            offset,
        }
    }
}

/// The measurements selected from one input string.
///
/// Built once per input and never mutated: at most one flow and one volume
/// (first textual occurrence wins), every length in order of appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuery {
    flow: Option<Measurement>,
    volume: Option<Measurement>,
    lengths: Vec<Measurement>,
}

impl ParsedQuery {
    /// Assemble a query directly. The extractor is the usual producer; this
    /// exists for callers that already hold structured measurements.
    #[must_use]
    pub fn new(
        flow: Option<Measurement>,
        volume: Option<Measurement>,
        lengths: Vec<Measurement>,
    ) -> Self {
        Self {
            flow,
            volume,
            lengths,
        }
    }

    /// First flow measurement found, if any.
    #[must_use]
    pub fn flow(&self) -> Option<&Measurement> {
        self.flow.as_ref()
    }

    /// First volume measurement found, if any.
    #[must_use]
    pub fn volume(&self) -> Option<&Measurement> {
        self.volume.as_ref()
    }

    /// Every length measurement, in order of appearance. The first is
    /// treated downstream as a diameter, the second as a bed height.
    #[must_use]
    pub fn lengths(&self) -> &[Measurement] {
        &self.lengths
    }
}
