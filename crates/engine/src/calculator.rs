//! Path selection and calculation.
//!
//! Candidate paths are tried in the fixed priority order declared on
//! [`ComputationPath::PRIORITY`]; the first path whose required inputs are
//! all present computes the result. When neither qualifies, the outcome is a
//! diagnostic naming exactly the missing categories.

use ebct_extract::{Measurement, ParsedQuery};
use ebct_units::{normalize, Constant, Normalized, GAL_PER_FT3, PI};

use crate::path::ComputationPath;

pub(crate) const NEED_FLOW: &str = "Flow rate (e.g., 800 gpm, 3.5 m3/h)";
pub(crate) const NEED_VOLUME_OR_DIMS: &str =
    "Bed volume (e.g., 9600 gal) or tank dimensions (e.g., 10 ft diameter, 8 ft height)";

/// One arithmetic step of a derivation, in calculation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Operation name, e.g. `cylinder_volume`.
    pub step: &'static str,
    /// Named numeric inputs to the operation.
    pub inputs: Vec<(&'static str, f64)>,
    /// Operation result.
    pub output: f64,
}

impl Step {
    fn new(step: &'static str, inputs: Vec<(&'static str, f64)>, output: f64) -> Self {
        Self {
            step,
            inputs,
            output,
        }
    }
}

/// A solved calculation with everything needed to audit it.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    /// Strategy that produced the result.
    pub path: ComputationPath,

    /// Empty bed contact time in minutes.
    pub minutes: f64,

    /// The flow measurement consulted, as extracted.
    pub flow: Measurement,

    /// The volume measurement consulted (volume path only), as extracted.
    pub volume: Option<Measurement>,

    /// The length measurements consulted (dims path only: diameter then
    /// height), as extracted.
    pub lengths: Vec<Measurement>,

    /// Named derived quantities in canonical units, in derivation order.
    pub normalized: Vec<(&'static str, f64)>,

    /// Named conversion factors consulted. May repeat; deduplicated when
    /// composed into the response payload.
    pub constants: Vec<Constant>,

    /// Prose derivation narrative.
    pub explanation: String,

    /// Ordered arithmetic steps.
    pub trace: Vec<Step>,
}

/// What was missing when no path qualified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Ordered descriptions of the missing categories, flow first.
    pub missing: Vec<&'static str>,
}

/// Mutually exclusive calculation outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Solved(Calculation),
    Missing(Diagnostic),
}

fn normalized_or_absent(m: &Measurement) -> Option<Normalized> {
    match normalize(m.kind, m.value, &m.unit) {
        Ok(n) => Some(n),
        Err(err) => {
            // The extractor never emits unrecognized tokens; a hand-built
            // query degrades to the same outcome as a missing measurement.
            log::warn!("treating {} measurement as absent: {err}", m.kind);
            None
        }
    }
}

/// Try the candidate paths in priority order against `query`.
#[must_use]
pub fn compute(query: &ParsedQuery) -> Outcome {
    let flow = query
        .flow()
        .and_then(|m| normalized_or_absent(m).map(|n| (m, n)))
        // A zero flow cannot be divided by; it counts as absent.
        .filter(|(_, n)| n.value != 0.0);

    for path in ComputationPath::PRIORITY {
        let solved = match path {
            ComputationPath::VolumeAndFlow => try_volume_flow(query, flow.as_ref()),
            ComputationPath::DimensionsAndFlow => try_dims_flow(query, flow.as_ref()),
        };
        if let Some(calculation) = solved {
            log::debug!("path selected: {}", path.via());
            return Outcome::Solved(calculation);
        }
    }

    log::debug!("no path qualified");
    Outcome::Missing(diagnose(query, flow.is_some()))
}

fn try_volume_flow(
    query: &ParsedQuery,
    flow: Option<&(&Measurement, Normalized)>,
) -> Option<Calculation> {
    let (flow_m, flow_n) = flow?;
    let volume_m = query.volume()?;
    let volume_n = normalized_or_absent(volume_m)?;

    let minutes = volume_n.value / flow_n.value;

    let mut constants = flow_n.constants.clone();
    constants.extend(volume_n.constants.iter().copied());

    let explanation = format!(
        "Normalized the extracted flow of {} {} to {:.4} gal/min and the bed volume of {} {} \
         to {:.4} gal. Dividing volume by flow yields an empty bed contact time of {:.4} minutes.",
        flow_m.value, flow_m.unit, flow_n.value, volume_m.value, volume_m.unit, volume_n.value,
        minutes
    );

    Some(Calculation {
        path: ComputationPath::VolumeAndFlow,
        minutes,
        flow: (*flow_m).clone(),
        volume: Some(volume_m.clone()),
        lengths: Vec::new(),
        normalized: vec![("flow_gpm", flow_n.value), ("volume_gal", volume_n.value)],
        constants,
        explanation,
        trace: vec![
            Step::new("normalize_flow", vec![("flow", flow_m.value)], flow_n.value),
            Step::new(
                "normalize_volume",
                vec![("volume", volume_m.value)],
                volume_n.value,
            ),
            Step::new(
                "divide",
                vec![("volume_gal", volume_n.value), ("flow_gpm", flow_n.value)],
                minutes,
            ),
        ],
    })
}

fn try_dims_flow(
    query: &ParsedQuery,
    flow: Option<&(&Measurement, Normalized)>,
) -> Option<Calculation> {
    let (flow_m, flow_n) = flow?;
    let [diameter_m, height_m] = match query.lengths() {
        [d, h, ..] => [d, h],
        _ => return None,
    };
    let diameter_n = normalized_or_absent(diameter_m)?;
    let height_n = normalized_or_absent(height_m)?;

    // Right circular cylinder: first length is the diameter, second the bed
    // height.
    let volume_ft3 = PI * (diameter_n.value / 2.0).powi(2) * height_n.value;
    let volume_gal = volume_ft3 * GAL_PER_FT3;
    let minutes = volume_gal / flow_n.value;

    let mut constants = flow_n.constants.clone();
    constants.extend(diameter_n.constants.iter().copied());
    constants.extend(height_n.constants.iter().copied());
    constants.push(Constant::PI);
    constants.push(Constant::GAL_PER_FT3);

    let explanation = format!(
        "Treated the first extracted length of {} {} as the bed diameter and the second of \
         {} {} as the bed height. Modeling the bed as a right circular cylinder gives \
         {:.4} ft³ ({:.4} gal), which divided by the normalized flow of {:.4} gal/min yields \
         an empty bed contact time of {:.4} minutes.",
        diameter_m.value,
        diameter_m.unit,
        height_m.value,
        height_m.unit,
        volume_ft3,
        volume_gal,
        flow_n.value,
        minutes
    );

    Some(Calculation {
        path: ComputationPath::DimensionsAndFlow,
        minutes,
        flow: (*flow_m).clone(),
        volume: None,
        lengths: vec![diameter_m.clone(), height_m.clone()],
        normalized: vec![
            ("flow_gpm", flow_n.value),
            ("diameter_ft", diameter_n.value),
            ("height_ft", height_n.value),
            ("volume_ft3", volume_ft3),
            ("volume_gal", volume_gal),
        ],
        constants,
        explanation,
        trace: vec![
            Step::new("normalize_flow", vec![("flow", flow_m.value)], flow_n.value),
            Step::new(
                "normalize_diameter",
                vec![("diameter", diameter_m.value)],
                diameter_n.value,
            ),
            Step::new(
                "normalize_height",
                vec![("height", height_m.value)],
                height_n.value,
            ),
            Step::new(
                "cylinder_volume",
                vec![
                    ("diameter_ft", diameter_n.value),
                    ("height_ft", height_n.value),
                ],
                volume_ft3,
            ),
            Step::new(
                "volume_to_gallons",
                vec![("volume_ft3", volume_ft3)],
                volume_gal,
            ),
            Step::new(
                "divide",
                vec![("volume_gal", volume_gal), ("flow_gpm", flow_n.value)],
                minutes,
            ),
        ],
    })
}

fn diagnose(query: &ParsedQuery, flow_usable: bool) -> Diagnostic {
    let mut missing = Vec::new();
    if !flow_usable {
        missing.push(NEED_FLOW);
    }
    if query.volume().is_none() && query.lengths().len() < 2 {
        missing.push(NEED_VOLUME_OR_DIMS);
    }
    Diagnostic { missing }
}
