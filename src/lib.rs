//! Soil Rating Rust Implementation
//!
//! Computation core behind the soil/corrosion assessment app, ported from
//! the browser front-end so both sides rate measurements identically:
//! - `compare`: deep structural equality for form/state dirty checks
//! - `rating`: DIN 50929-3-style tier table, first-match evaluator, and
//!   aggregate soil class assessment
//!
//! Everything here is a pure function over plain data. The UI, persistence
//! and localization layers live elsewhere and call in with structured
//! values; failures are returned as values, never panics.

pub mod compare;
pub mod rating;

// Re-export commonly used types
pub use compare::{structural_equal, ComparableValue};
pub use rating::{
    assess, parameter_by_code, parameters, score_for, ObservedValue, RangeMatch, RatingBound,
    RatingError, RatingParameter, RatingRange, SoilAssessment, SoilClass,
};
