//! Assembly of the final response payload.
//!
//! The composer is the only place domain values become wire types: raw
//! measurement echoes, normalized intermediates, constants, the path's
//! formula template, and the step trace.

use std::collections::BTreeMap;

use ebct_extract::Measurement;
use ebct_protocol::{Detail, Failure, InputEcho, Inputs, Response, Success, TraceStep};

use crate::calculator::{Calculation, Outcome, Step};

const INSUFFICIENT: &str = "Not enough information to compute EBCT";

/// Turn a calculation outcome into the response payload.
#[must_use]
pub fn compose(outcome: Outcome) -> Response {
    match outcome {
        Outcome::Solved(calculation) => Response::Success(success(calculation)),
        Outcome::Missing(diagnostic) => Response::Failure(Failure::new(
            INSUFFICIENT,
            diagnostic.missing.iter().map(ToString::to_string).collect(),
        )),
    }
}

fn success(calculation: Calculation) -> Success {
    // The calculator records only what the chosen path consulted, so the
    // echo is a straight projection.
    let inputs = Inputs {
        flow: Some(echo(&calculation.flow)),
        volume: calculation.volume.as_ref().map(echo),
        lengths: calculation.lengths.iter().map(echo).collect(),
    };

    let units_normalized: BTreeMap<String, f64> = calculation
        .normalized
        .iter()
        .map(|(name, value)| ((*name).to_string(), *value))
        .collect();

    // BTreeMap insertion deduplicates factors reported by more than one
    // conversion.
    let constants: BTreeMap<String, f64> = calculation
        .constants
        .iter()
        .map(|c| (c.name.to_string(), c.value))
        .collect();

    let detail = Detail {
        inputs,
        units_normalized,
        constants,
        formula: calculation.path.formula().to_string(),
        explanation: calculation.explanation,
        trace: calculation.trace.iter().map(trace_step).collect(),
    };

    Success::new(calculation.path.via(), calculation.minutes, detail)
}

fn echo(m: &Measurement) -> InputEcho {
    InputEcho::new(m.value, m.unit.clone())
}

fn trace_step(step: &Step) -> TraceStep {
    TraceStep {
        step: step.step.to_string(),
        inputs: step
            .inputs
            .iter()
            .map(|(name, value)| ((*name).to_string(), *value))
            .collect(),
        output: step.output,
    }
}
