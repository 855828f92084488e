//! Soil Assessment Output Types
//!
//! Aggregates per-parameter scores into the overall corrosivity verdict
//! reported to summary views: the score total over all rated observations
//! and the soil class derived from it. Observations that cannot be rated
//! (unknown code, value outside every tier) are collected rather than
//! failing the whole assessment.

use serde::Serialize;

use super::evaluate::{score_for, ObservedValue};
use super::table::{parameter_by_code, RatingRange};

/// Soil corrosivity class derived from the score total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SoilClass {
    /// Total >= 0
    Ia,
    /// Total -1 to -4
    Ib,
    /// Total -5 to -10
    II,
    /// Total -11 and below
    III,
}

impl SoilClass {
    pub fn from_total(total: i32) -> Self {
        if total >= 0 {
            SoilClass::Ia
        } else if total >= -4 {
            SoilClass::Ib
        } else if total >= -10 {
            SoilClass::II
        } else {
            SoilClass::III
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            SoilClass::Ia => "Class Ia",
            SoilClass::Ib => "Class Ib",
            SoilClass::II => "Class II",
            SoilClass::III => "Class III",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SoilClass::Ia => "Virtually non-aggressive soil",
            SoilClass::Ib => "Slightly aggressive soil",
            SoilClass::II => "Aggressive soil",
            SoilClass::III => "Strongly aggressive soil",
        }
    }
}

/// One rated observation with the tier it matched.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterScore {
    pub code: &'static str,
    pub observed: ObservedValue,
    pub score: i32,
    pub range: &'static RatingRange,
}

/// An observation that could not be rated, with the reason for display.
#[derive(Debug, Clone, Serialize)]
pub struct UnratedObservation {
    pub code: String,
    pub observed: ObservedValue,
    pub reason: String,
}

/// Complete assessment over a set of observed parameters.
#[derive(Debug, Clone, Serialize)]
pub struct SoilAssessment {
    /// Rated observations in input order
    pub scores: Vec<ParameterScore>,

    /// Observations skipped from the total
    pub unrated: Vec<UnratedObservation>,

    /// Score total over the rated observations
    pub total: i32,

    /// Corrosivity class for the total
    pub class: SoilClass,
}

/// Assess a set of observations against the parameter table.
///
/// Each observation is `(parameter code, observed value)`. Unknown codes and
/// out-of-table values land in `unrated` and do not contribute to the total.
pub fn assess(observations: &[(&str, ObservedValue)]) -> SoilAssessment {
    let mut scores = Vec::new();
    let mut unrated = Vec::new();

    for (code, observed) in observations {
        let parameter = match parameter_by_code(code) {
            Some(parameter) => parameter,
            None => {
                unrated.push(UnratedObservation {
                    code: (*code).to_string(),
                    observed: observed.clone(),
                    reason: format!("unknown parameter code '{}'", code),
                });
                continue;
            }
        };

        match score_for(parameter, observed) {
            Ok(matched) => scores.push(ParameterScore {
                code: parameter.code,
                observed: observed.clone(),
                score: matched.score,
                range: matched.range,
            }),
            Err(err) => {
                unrated.push(UnratedObservation {
                    code: (*code).to_string(),
                    observed: observed.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    let total = scores.iter().map(|s| s.score).sum();

    SoilAssessment {
        scores,
        unrated,
        total,
        class: SoilClass::from_total(total),
    }
}
