//! Soil Corrosivity Rating
//!
//! Scores observed soil measurements against a static, DIN 50929-3-style
//! multi-parameter tier table and aggregates the per-parameter scores into
//! an overall soil class.
//!
//! ## Architecture
//! - `table.rs` - Z1-Z10 parameter definitions with embedded tier data
//! - `evaluate.rs` - First-match tier lookup for one observed value
//! - `assessment.rs` - Aggregate score total and soil class output structs

pub mod assessment;
pub mod evaluate;
pub mod table;

// Re-export public API
pub use assessment::{assess, ParameterScore, SoilAssessment, SoilClass, UnratedObservation};
pub use evaluate::{score_for, ObservedValue, RangeMatch, RatingError};
pub use table::{
    parameter_by_code, parameters, LocalizedName, RatingBound, RatingParameter, RatingRange,
};
