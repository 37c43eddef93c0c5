//! Canonicalization: one conversion function per measurement kind.
//!
//! Conversions are pure and total over the typed unit enums. Each result
//! carries the named constants that were consulted, so the calculation layer
//! can echo them back without re-deriving which factor applied.

use crate::error::{Result, UnitError};
use crate::kind::MeasurementKind;
use crate::tables::Constant;
use crate::tokens::{FlowUnit, LengthUnit, VolumeUnit};

/// A value converted to its kind's canonical unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Converted {
    /// Value in the canonical unit.
    pub value: f64,
    /// Named factors consulted; empty for identity conversions.
    pub constants: Vec<Constant>,
}

impl Converted {
    fn identity(value: f64) -> Self {
        Self {
            value,
            constants: Vec::new(),
        }
    }

    fn with(value: f64, constants: Vec<Constant>) -> Self {
        Self { value, constants }
    }
}

/// Flow rate to gallons per minute.
#[must_use]
pub fn flow_to_gpm(value: f64, unit: FlowUnit) -> Converted {
    match unit {
        FlowUnit::Gpm => Converted::identity(value),
        FlowUnit::LitersPerMinute => Converted::with(
            value / Constant::L_PER_GAL.value,
            vec![Constant::L_PER_GAL],
        ),
        FlowUnit::CubicMetersPerHour => Converted::with(
            value * Constant::GAL_PER_M3.value / Constant::MIN_PER_H.value,
            vec![Constant::GAL_PER_M3, Constant::MIN_PER_H],
        ),
    }
}

/// Volume to gallons.
#[must_use]
pub fn volume_to_gal(value: f64, unit: VolumeUnit) -> Converted {
    match unit {
        VolumeUnit::Gallons => Converted::identity(value),
        VolumeUnit::CubicFeet => Converted::with(
            value * Constant::GAL_PER_FT3.value,
            vec![Constant::GAL_PER_FT3],
        ),
        VolumeUnit::CubicMeters => Converted::with(
            value * Constant::GAL_PER_M3.value,
            vec![Constant::GAL_PER_M3],
        ),
    }
}

/// Length to feet.
#[must_use]
pub fn length_to_ft(value: f64, unit: LengthUnit) -> Converted {
    match unit {
        LengthUnit::Feet => Converted::identity(value),
        LengthUnit::Inches => Converted::with(
            value / Constant::IN_PER_FT.value,
            vec![Constant::IN_PER_FT],
        ),
        LengthUnit::Meters => Converted::with(
            value * Constant::FT_PER_M.value,
            vec![Constant::FT_PER_M],
        ),
    }
}

/// A measurement expressed in its kind's canonical unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// Value in the canonical unit.
    pub value: f64,
    pub kind: MeasurementKind,
    /// Canonical unit token (`gpm`, `gal`, `ft`).
    pub unit: &'static str,
    /// Named factors consulted by the conversion.
    pub constants: Vec<Constant>,
}

/// String-level canonicalization entry point.
///
/// Fails closed for tokens outside the supported set. The extractor only
/// emits supported tokens, so callers feeding it extractor output can treat
/// an error as a bug upstream.
pub fn normalize(kind: MeasurementKind, value: f64, token: &str) -> Result<Normalized> {
    let unrecognized = || UnitError::UnrecognizedUnit {
        kind,
        token: token.to_string(),
    };
    let converted = match kind {
        MeasurementKind::Flow => {
            let unit = FlowUnit::from_token(token).ok_or_else(unrecognized)?;
            flow_to_gpm(value, unit)
        }
        MeasurementKind::Volume => {
            let unit = VolumeUnit::from_token(token).ok_or_else(unrecognized)?;
            volume_to_gal(value, unit)
        }
        MeasurementKind::Length => {
            let unit = LengthUnit::from_token(token).ok_or_else(unrecognized)?;
            length_to_ft(value, unit)
        }
    };
    Ok(Normalized {
        value: converted.value,
        kind,
        unit: kind.canonical_unit(),
        constants: converted.constants,
    })
}
