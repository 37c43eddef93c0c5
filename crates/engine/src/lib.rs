//! # EBCT Engine
//!
//! Computes an empty bed contact time from free-form text: the residence
//! time of fluid flowing through a granular bed of a given volume at a given
//! flow rate.
//!
//! ## Architecture
//!
//! ```text
//! raw text
//!     │
//!     ├──> extract (ebct-extract)
//!     │      └─> ParsedQuery
//!     │
//!     ├──> compute (path selection + calculation)
//!     │      ├─> VolumeAndFlow:     minutes = volume_gal / flow_gpm
//!     │      ├─> DimensionsAndFlow: cylinder volume from D and H, then divide
//!     │      └─> Diagnostic when neither path qualifies
//!     │
//!     └──> compose
//!            └─> Response (ebct-protocol)
//! ```
//!
//! The engine is purely functional and stateless: each invocation takes an
//! input string and returns a value, with no shared mutable state and no
//! I/O. Calls may run concurrently without coordination. Transport,
//! rendering, and any conversational layer in front of the engine are
//! external collaborators.
//!
//! ## Example
//!
//! ```
//! use ebct_engine::{compute_ebct, Response};
//!
//! match compute_ebct("flow 800 gpm, bed volume 9600 gal") {
//!     Response::Success(success) => {
//!         assert_eq!(success.via, "volume+flow");
//!         assert!((success.minutes - 12.0).abs() < 1e-9);
//!     }
//!     Response::Failure(failure) => panic!("missing: {:?}", failure.need),
//! }
//! ```

mod calculator;
mod compose;
mod path;

pub use calculator::{compute, Calculation, Diagnostic, Outcome, Step};
pub use compose::compose;
pub use path::ComputationPath;

pub use ebct_extract::{extract, Measurement, ParsedQuery};
pub use ebct_protocol::Response;

/// Extract measurements from `text`, compute, and compose the response.
///
/// This is the whole public surface a transport layer needs.
#[must_use]
pub fn compute_ebct(text: &str) -> Response {
    let query = extract(text);
    let response = compose(compute(&query));
    log::debug!("computed: ok={}", response.is_ok());
    response
}
