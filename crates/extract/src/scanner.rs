//! Per-category token scanning.
//!
//! One compiled pattern per measurement category. Each pattern anchors on an
//! unsigned decimal followed by optional whitespace and the category's unit
//! alternation; matching is case-insensitive and ignores surrounding words,
//! so mixed-language text around the tokens is tolerated.
//!
//! The categories are scanned independently: the same raw substring may be
//! read under more than one category (`3.5 m3/h` is a flow token, a volume
//! token `3.5 m3`, and a length token `3.5 m` at once). Selection rules
//! downstream decide what each category keeps.

use ebct_units::MeasurementKind;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::types::Measurement;

static FLOW_PATTERN: Lazy<Regex> =
    Lazy::new(|| build(r"(\d+(?:\.\d+)?)\s*(gpm|l/min|lpm|m3/h|m³/h)"));

static VOLUME_PATTERN: Lazy<Regex> =
    Lazy::new(|| build(r"(\d+(?:\.\d+)?)\s*(gal|ft3|ft³|m3|m³)"));

static LENGTH_PATTERN: Lazy<Regex> = Lazy::new(|| build(r"(\d+(?:\.\d+)?)\s*(ft|m|in)"));

fn build(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("hardcoded pattern compiles")
}

/// All number/unit matches for one category, in order of appearance.
pub(crate) fn scan(kind: MeasurementKind, text: &str) -> Vec<Measurement> {
    let pattern: &Regex = match kind {
        MeasurementKind::Flow => &FLOW_PATTERN,
        MeasurementKind::Volume => &VOLUME_PATTERN,
        MeasurementKind::Length => &LENGTH_PATTERN,
    };
    pattern
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let value: f64 = caps.get(1)?.as_str().parse().ok()?;
            let unit = caps.get(2)?.as_str().to_lowercase();
            Some(Measurement::new(value, unit, kind, whole.start()))
        })
        .collect()
}
