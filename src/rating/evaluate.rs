//! Rating Evaluator
//!
//! First-match tier lookup: given a parameter's tier table and an observed
//! value, return the matching tier and its score contribution. A single
//! linear scan in declared order, no pre-sorting or validation pass — the
//! table is static and hand-authored, and declared order carries meaning
//! (Z1's categorical sentinel sits after its unbounded numeric tier).

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::table::{RatingBound, RatingParameter, RatingRange};

/// A user-entered or sensor-derived measurement to be scored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ObservedValue {
    Numeric(f64),
    Categorical(String),
}

impl From<f64> for ObservedValue {
    fn from(value: f64) -> Self {
        ObservedValue::Numeric(value)
    }
}

impl From<&str> for ObservedValue {
    fn from(token: &str) -> Self {
        ObservedValue::Categorical(token.to_string())
    }
}

impl fmt::Display for ObservedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObservedValue::Numeric(v) => write!(f, "{}", v),
            ObservedValue::Categorical(token) => write!(f, "'{}'", token),
        }
    }
}

/// Observed value outside all declared tiers. Recoverable: callers display
/// "N/A" or prompt re-entry, reports skip the parameter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RatingError {
    #[error("no {parameter} tier matches observed value {observed}")]
    NoMatchingRange {
        parameter: &'static str,
        observed: ObservedValue,
    },
}

/// Matched tier with its score contribution, kept for display and audit.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RangeMatch {
    pub score: i32,
    pub range: &'static RatingRange,
}

/// Score an observed value against a parameter's tier table.
///
/// Numeric tiers match a numeric observation with `lower <= v` (inclusive)
/// and `v < upper` where an upper bound exists. Categorical tiers match a
/// text observation by exact, case-sensitive token equality. Each tier is
/// paired against the observation's kind, so a categorical sentinel inside
/// an otherwise numeric table stays reachable in declared order.
pub fn score_for(
    parameter: &RatingParameter,
    observed: &ObservedValue,
) -> Result<RangeMatch, RatingError> {
    for range in parameter.ranges {
        if range_matches(range, observed) {
            return Ok(RangeMatch { score: range.score, range });
        }
    }

    Err(RatingError::NoMatchingRange {
        parameter: parameter.code,
        observed: observed.clone(),
    })
}

fn range_matches(range: &RatingRange, observed: &ObservedValue) -> bool {
    match (&range.lower, observed) {
        (RatingBound::Numeric(lower), ObservedValue::Numeric(v)) => {
            *v >= *lower && range.upper.map_or(true, |upper| *v < upper)
        }
        (RatingBound::Token(token), ObservedValue::Categorical(s)) => *token == s.as_str(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::table::parameter_by_code;

    fn score(code: &str, observed: impl Into<ObservedValue>) -> Result<i32, RatingError> {
        let parameter = parameter_by_code(code).unwrap();
        score_for(parameter, &observed.into()).map(|m| m.score)
    }

    #[test]
    fn test_z3_lower_bound_inclusive() {
        assert_eq!(score("Z3", 20.0), Ok(-1));
        assert_eq!(score("Z3", 19.9), Ok(0));
        assert_eq!(score("Z3", 1000.0), Ok(-2));
    }

    #[test]
    fn test_z6_boundaries() {
        assert_eq!(score("Z6", 0.0), Ok(-2));
        assert_eq!(score("Z6", 10.0), Ok(1));
        assert_eq!(score("Z6", 4.99), Ok(-1));
        assert_eq!(score("Z6", 5.0), Ok(0));
    }

    #[test]
    fn test_z10_categorical_exact_match() {
        assert_eq!(score("Z10", "constant"), Ok(-1));
        assert_eq!(score("Z10", "none"), Ok(0));
        assert_eq!(score("Z10", "fluctuating"), Ok(-2));

        let err = score("Z10", "unknown").unwrap_err();
        assert_eq!(
            err,
            RatingError::NoMatchingRange {
                parameter: "Z10",
                observed: ObservedValue::Categorical("unknown".to_string()),
            }
        );
    }

    #[test]
    fn test_categorical_match_is_case_sensitive() {
        assert!(score("Z10", "Constant").is_err());
    }

    #[test]
    fn test_numeric_value_below_table() {
        let err = score("Z2", -5.0).unwrap_err();
        assert!(matches!(err, RatingError::NoMatchingRange { parameter: "Z2", .. }));
    }

    #[test]
    fn test_z1_impurities_sentinel_reachable() {
        assert_eq!(score("Z1", "impurities"), Ok(-12));
        // Numeric observations still hit the numeric tiers
        assert_eq!(score("Z1", 85.0), Ok(-4));
        assert_eq!(score("Z1", 5.0), Ok(4));
    }

    #[test]
    fn test_kind_mismatch_falls_through_to_error() {
        // Text observation against a numeric-first table
        assert!(score("Z3", "damp").is_err());
        // Numeric observation against the categorical groundwater table
        assert!(score("Z10", 1.0).is_err());
    }

    #[test]
    fn test_error_message_names_parameter_and_value() {
        let err = score("Z10", "unknown").unwrap_err();
        assert_eq!(err.to_string(), "no Z10 tier matches observed value 'unknown'");
    }
}
