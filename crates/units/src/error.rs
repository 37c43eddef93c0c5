use thiserror::Error;

use crate::kind::MeasurementKind;

pub type Result<T> = std::result::Result<T, UnitError>;

/// Errors from unit canonicalization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// The token is outside the supported set for its kind. The extractor
    /// never produces such tokens; this fires only for hand-built input.
    #[error("unrecognized {kind} unit token: {token:?}")]
    UnrecognizedUnit {
        kind: MeasurementKind,
        token: String,
    },
}
