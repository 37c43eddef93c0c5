//! # EBCT Units
//!
//! Unit kinds, conversion tables, and canonicalization for the EBCT engine.
//!
//! Every measurement kind has exactly one canonical unit (gallons per minute
//! for flow, gallons for volume, feet for length) and all downstream
//! arithmetic happens on canonical values only. Conversions report the named
//! constants they consulted so a calculation can surface a fully auditable
//! derivation.

mod convert;
mod error;
mod kind;
mod tables;
mod tokens;

pub use convert::{flow_to_gpm, length_to_ft, normalize, volume_to_gal, Converted, Normalized};
pub use error::{Result, UnitError};
pub use kind::MeasurementKind;
pub use tables::{
    Constant, FT_PER_M, GAL_PER_FT3, GAL_PER_M3, IN_PER_FT, L_PER_GAL, MIN_PER_H, PI,
};
pub use tokens::{FlowUnit, LengthUnit, VolumeUnit};
