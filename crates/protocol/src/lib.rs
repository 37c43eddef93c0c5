//! # EBCT Protocol
//!
//! The structured payload the engine hands to whatever transport or UI sits
//! in front of it. The engine itself has no network surface; these types are
//! the entire contract.
//!
//! A response is a two-variant union, exhaustively matched by callers. Each
//! variant still carries its literal `ok` discriminant because existing
//! clients switch on `ok` / `minutes` / `need` in the serialized form.
//!
//! Map-valued fields use `BTreeMap` so serialization order is deterministic:
//! composing the same outcome twice yields byte-identical JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Engine outcome: a computed contact time or a list of what was missing.
/// Never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Success(Success),
    Failure(Failure),
}

impl Response {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// A computed empty bed contact time with its full derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Success {
    /// Always `true`; wire discriminant.
    pub ok: bool,

    /// Human-readable computation path tag, e.g. `volume+flow`.
    pub via: String,

    /// Empty bed contact time in minutes.
    pub minutes: f64,

    /// Auditable derivation.
    pub detail: Detail,
}

impl Success {
    #[must_use]
    pub fn new(via: impl Into<String>, minutes: f64, detail: Detail) -> Self {
        Self {
            ok: true,
            via: via.into(),
            minutes,
            detail,
        }
    }
}

/// Everything needed to audit a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detail {
    /// Raw extracted measurements the chosen path consulted, as written in
    /// the input (never normalized values).
    pub inputs: Inputs,

    /// Named derived quantities in canonical units, e.g. `volume_gal`.
    pub units_normalized: BTreeMap<String, f64>,

    /// Named conversion factors consulted.
    pub constants: BTreeMap<String, f64>,

    /// Literal formula template for the chosen path.
    pub formula: String,

    /// Prose derivation narrative.
    pub explanation: String,

    /// Ordered arithmetic steps.
    pub trace: Vec<TraceStep>,
}

/// Raw measurement echo grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<InputEcho>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<InputEcho>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lengths: Vec<InputEcho>,
}

/// One raw value/unit pair as extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputEcho {
    pub value: f64,
    pub unit: String,
}

impl InputEcho {
    #[must_use]
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

/// One arithmetic step of a derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    /// Operation name, e.g. `cylinder_volume`.
    pub step: String,

    /// Named numeric inputs to the operation.
    pub inputs: BTreeMap<String, f64>,

    /// Operation result.
    pub output: f64,
}

/// The engine could not compute: lists what was missing. Never carries a
/// partial numeric result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    /// Always `false`; wire discriminant.
    pub ok: bool,

    /// One-line summary.
    pub error: String,

    /// Ordered human-readable descriptions of the missing measurement
    /// categories, each naming acceptable unit examples.
    pub need: Vec<String>,
}

impl Failure {
    #[must_use]
    pub fn new(error: impl Into<String>, need: Vec<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
            need,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn success_serializes_with_ok_true() {
        let response = Response::Success(Success::new(
            "volume+flow",
            12.0,
            Detail {
                inputs: Inputs {
                    flow: Some(InputEcho::new(800.0, "gpm")),
                    volume: Some(InputEcho::new(9600.0, "gal")),
                    lengths: Vec::new(),
                },
                units_normalized: BTreeMap::from([
                    ("flow_gpm".to_string(), 800.0),
                    ("volume_gal".to_string(), 9600.0),
                ]),
                constants: BTreeMap::new(),
                formula: "EBCT(min) = Volume(gal) / Flow(gal/min)".to_string(),
                explanation: "volume over flow".to_string(),
                trace: Vec::new(),
            },
        ));

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&response).expect("serialize"))
                .expect("parse");
        assert_eq!(json["ok"], serde_json::json!(true));
        assert_eq!(json["via"], serde_json::json!("volume+flow"));
        assert_eq!(json["minutes"], serde_json::json!(12.0));
        // Empty length list is omitted entirely.
        assert!(json["detail"]["inputs"].get("lengths").is_none());
    }

    #[test]
    fn failure_serializes_with_ok_false_and_need_list() {
        let response = Response::Failure(Failure::new(
            "insufficient measurements",
            vec!["Flow rate (e.g., 800 gpm, 3.5 m3/h)".to_string()],
        ));
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&response).expect("serialize"))
                .expect("parse");
        assert_eq!(json["ok"], serde_json::json!(false));
        assert_eq!(json["need"].as_array().expect("need").len(), 1);
        assert!(!response.is_ok());
    }

    #[test]
    fn responses_round_trip_through_the_untagged_union() {
        let failure = Response::Failure(Failure::new("x", Vec::new()));
        let back: Response =
            serde_json::from_str(&serde_json::to_string(&failure).expect("serialize"))
                .expect("deserialize");
        assert_eq!(failure, back);
    }
}
