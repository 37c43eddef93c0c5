//! # EBCT Extract
//!
//! Measurement extraction from free-form text.
//!
//! The extractor scans raw text for numeric-value/unit pairs and builds a
//! [`ParsedQuery`] for the calculation layer. It does no natural-language
//! understanding: unit tokens and digits are matched positionally and the
//! words around them are ignored.
//!
//! ## Architecture
//!
//! ```text
//! raw text
//!     │
//!     ├──> scan(Flow)   ──> first match wins
//!     ├──> scan(Volume) ──> first match wins
//!     └──> scan(Length) ──> every match, in order of appearance
//!                │
//!                └──> ParsedQuery
//! ```
//!
//! Categories are scanned in fixed priority order (flow, volume, length),
//! each against its own pattern. A substring may legally be read by more
//! than one category; that is an accepted ambiguity, not a conflict.

mod scanner;
mod types;

pub use types::{Measurement, ParsedQuery};

use ebct_units::MeasurementKind;

/// Extract the measurements a calculation can work with from `text`.
///
/// Flow and volume keep only their first textual occurrence; later matches
/// of the same kind are ignored. Lengths are all kept, left to right.
#[must_use]
pub fn extract(text: &str) -> ParsedQuery {
    let flow = scanner::scan(MeasurementKind::Flow, text).into_iter().next();
    let volume = scanner::scan(MeasurementKind::Volume, text)
        .into_iter()
        .next();
    let lengths = scanner::scan(MeasurementKind::Length, text);

    log::debug!(
        "extracted: flow={}, volume={}, lengths={}",
        flow.is_some(),
        volume.is_some(),
        lengths.len()
    );

    ParsedQuery::new(flow, volume, lengths)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::extract;

    #[test]
    fn extraction_is_deterministic_and_case_insensitive() {
        let a = extract("Flow 800 GPM");
        let b = extract("flow 800 gpm");
        assert_eq!(a, b);
        assert_eq!(a.flow().expect("flow").value, 800.0);
    }

    #[test]
    fn first_flow_occurrence_wins() {
        let query = extract("flow 800 gpm, later corrected to 900 gpm");
        assert_eq!(query.flow().expect("flow").value, 800.0);
    }

    #[test]
    fn first_volume_occurrence_wins() {
        let query = extract("bed 9600 gal, spare tank 500 gal");
        assert_eq!(query.volume().expect("volume").value, 9600.0);
    }

    #[test]
    fn lengths_are_all_kept_in_order() {
        let query = extract("tank 6 ft diameter, 8 ft height, freeboard 18 in");
        let values: Vec<f64> = query.lengths().iter().map(|m| m.value).collect();
        assert_eq!(values, vec![6.0, 8.0, 18.0]);
        let units: Vec<&str> = query.lengths().iter().map(|m| m.unit.as_str()).collect();
        assert_eq!(units, vec!["ft", "ft", "in"]);
    }

    #[test]
    fn offsets_point_at_the_matches() {
        let query = extract("flow 800 gpm, bed volume 9600 gal");
        assert_eq!(query.flow().expect("flow").offset, 5);
        assert_eq!(query.volume().expect("volume").offset, 25);
    }

    #[test]
    fn unknown_units_do_not_match() {
        let query = extract("flow 800 cfm, bed 42 barrels");
        assert!(query.flow().is_none());
        assert!(query.volume().is_none());
    }

    #[test]
    fn empty_text_yields_an_empty_query() {
        let query = extract("");
        assert!(query.flow().is_none());
        assert!(query.volume().is_none());
        assert!(query.lengths().is_empty());
    }
}
