//! DIN-Style Rating Parameter Table
//!
//! Embedded Z1-Z10 parameter definitions of the multi-parameter soil
//! corrosivity scheme (DIN 50929-3 style). The table is a hand-authored,
//! versioned data asset: loaded once at compile time, immutable for the
//! process lifetime, and cross-referenced by external report generation
//! through the stable `id`/`code` of each entry.
//!
//! Tier order is significant. Evaluation is a first-match scan in declared
//! order, so the table is not required to be sorted or exhaustive; Z1 keeps
//! its categorical "impurities" sentinel after the unbounded numeric tier
//! exactly as in the source data.

use serde::Serialize;

/// Lower bound of a tier: a numeric threshold or a categorical token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum RatingBound {
    Numeric(f64),
    Token(&'static str),
}

/// One tier of a parameter: half-open interval `[lower, upper)` in numeric
/// mode (`upper: None` means unbounded above), exact token match in
/// categorical mode (`upper` always `None`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingRange {
    pub lower: RatingBound,
    pub upper: Option<f64>,
    pub score: i32,
}

/// Localized display name, keyed by language code with English fallback.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LocalizedName {
    pub en: &'static str,
    pub de: &'static str,
}

impl LocalizedName {
    pub fn get(&self, lang: &str) -> Option<&'static str> {
        match lang {
            "en" => Some(self.en),
            "de" => Some(self.de),
            _ => None,
        }
    }

    /// Display name for a language, falling back to English.
    pub fn display(&self, lang: &str) -> &'static str {
        self.get(lang).unwrap_or(self.en)
    }
}

/// One named measurable property with its tier table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RatingParameter {
    /// Stable token for cross-referencing by report generation
    pub id: &'static str,

    /// Short display code, unique within the standard
    pub code: &'static str,

    /// Localized display name
    pub name: LocalizedName,

    /// Display unit ("-" where dimensionless)
    pub unit: &'static str,

    /// Human-readable valid input span, display-only
    pub bounds_description: &'static str,

    /// Tiers in declared (first-match) order
    pub ranges: &'static [RatingRange],
}

// ============================================================================
// EMBEDDED TIER DATA
// ============================================================================

static Z1_RANGES: &[RatingRange] = &[
    RatingRange { lower: RatingBound::Numeric(0.0), upper: Some(10.0), score: 4 },
    RatingRange { lower: RatingBound::Numeric(10.0), upper: Some(30.0), score: 2 },
    RatingRange { lower: RatingBound::Numeric(30.0), upper: Some(50.0), score: 0 },
    RatingRange { lower: RatingBound::Numeric(50.0), upper: Some(80.0), score: -2 },
    RatingRange { lower: RatingBound::Numeric(80.0), upper: None, score: -4 },
    // Sentinel override for soils contaminated with ash, slag or refuse
    RatingRange { lower: RatingBound::Token("impurities"), upper: None, score: -12 },
];

static Z2_RANGES: &[RatingRange] = &[
    RatingRange { lower: RatingBound::Numeric(0.0), upper: Some(10.0), score: -6 },
    RatingRange { lower: RatingBound::Numeric(10.0), upper: Some(20.0), score: -4 },
    RatingRange { lower: RatingBound::Numeric(20.0), upper: Some(50.0), score: -2 },
    RatingRange { lower: RatingBound::Numeric(50.0), upper: Some(200.0), score: 0 },
    RatingRange { lower: RatingBound::Numeric(200.0), upper: Some(500.0), score: 2 },
    RatingRange { lower: RatingBound::Numeric(500.0), upper: None, score: 4 },
];

static Z3_RANGES: &[RatingRange] = &[
    RatingRange { lower: RatingBound::Numeric(0.0), upper: Some(20.0), score: 0 },
    RatingRange { lower: RatingBound::Numeric(20.0), upper: Some(40.0), score: -1 },
    RatingRange { lower: RatingBound::Numeric(40.0), upper: None, score: -2 },
];

static Z4_RANGES: &[RatingRange] = &[
    RatingRange { lower: RatingBound::Numeric(0.0), upper: Some(4.0), score: -2 },
    RatingRange { lower: RatingBound::Numeric(4.0), upper: Some(5.0), score: -1 },
    RatingRange { lower: RatingBound::Numeric(5.0), upper: Some(8.0), score: 0 },
    RatingRange { lower: RatingBound::Numeric(8.0), upper: None, score: 1 },
];

static Z5_RANGES: &[RatingRange] = &[
    RatingRange { lower: RatingBound::Numeric(0.0), upper: Some(2.5), score: 0 },
    RatingRange { lower: RatingBound::Numeric(2.5), upper: Some(5.0), score: -1 },
    RatingRange { lower: RatingBound::Numeric(5.0), upper: Some(10.0), score: -2 },
    RatingRange { lower: RatingBound::Numeric(10.0), upper: Some(20.0), score: -3 },
    RatingRange { lower: RatingBound::Numeric(20.0), upper: None, score: -4 },
];

static Z6_RANGES: &[RatingRange] = &[
    RatingRange { lower: RatingBound::Numeric(0.0), upper: Some(1.0), score: -2 },
    RatingRange { lower: RatingBound::Numeric(1.0), upper: Some(5.0), score: -1 },
    RatingRange { lower: RatingBound::Numeric(5.0), upper: Some(10.0), score: 0 },
    RatingRange { lower: RatingBound::Numeric(10.0), upper: None, score: 1 },
];

static Z7_RANGES: &[RatingRange] = &[
    RatingRange { lower: RatingBound::Numeric(0.0), upper: Some(5.0), score: 0 },
    RatingRange { lower: RatingBound::Numeric(5.0), upper: Some(10.0), score: -3 },
    RatingRange { lower: RatingBound::Numeric(10.0), upper: None, score: -6 },
];

static Z8_RANGES: &[RatingRange] = &[
    RatingRange { lower: RatingBound::Numeric(0.0), upper: Some(3.0), score: 0 },
    RatingRange { lower: RatingBound::Numeric(3.0), upper: Some(10.0), score: -1 },
    RatingRange { lower: RatingBound::Numeric(10.0), upper: Some(30.0), score: -2 },
    RatingRange { lower: RatingBound::Numeric(30.0), upper: Some(100.0), score: -3 },
    RatingRange { lower: RatingBound::Numeric(100.0), upper: None, score: -4 },
];

static Z9_RANGES: &[RatingRange] = &[
    RatingRange { lower: RatingBound::Numeric(0.0), upper: Some(2.0), score: 0 },
    RatingRange { lower: RatingBound::Numeric(2.0), upper: Some(5.0), score: -1 },
    RatingRange { lower: RatingBound::Numeric(5.0), upper: Some(10.0), score: -2 },
    RatingRange { lower: RatingBound::Numeric(10.0), upper: None, score: -3 },
];

static Z10_RANGES: &[RatingRange] = &[
    RatingRange { lower: RatingBound::Token("none"), upper: None, score: 0 },
    RatingRange { lower: RatingBound::Token("constant"), upper: None, score: -1 },
    RatingRange { lower: RatingBound::Token("fluctuating"), upper: None, score: -2 },
];

static PARAMETERS: &[RatingParameter] = &[
    RatingParameter {
        id: "din50929_z1",
        code: "Z1",
        name: LocalizedName { en: "Soil type (cohesive fraction)", de: "Bodenart" },
        unit: "%",
        bounds_description: "0-100 % slakeable components, or 'impurities'",
        ranges: Z1_RANGES,
    },
    RatingParameter {
        id: "din50929_z2",
        code: "Z2",
        name: LocalizedName { en: "Soil resistivity", de: "Spezifischer Bodenwiderstand" },
        unit: "Ohm*m",
        bounds_description: ">= 0 Ohm*m",
        ranges: Z2_RANGES,
    },
    RatingParameter {
        id: "din50929_z3",
        code: "Z3",
        name: LocalizedName { en: "Water content", de: "Wassergehalt" },
        unit: "%",
        bounds_description: "0-100 %",
        ranges: Z3_RANGES,
    },
    RatingParameter {
        id: "din50929_z4",
        code: "Z4",
        name: LocalizedName { en: "pH value", de: "pH-Wert" },
        unit: "-",
        bounds_description: "0-14",
        ranges: Z4_RANGES,
    },
    RatingParameter {
        id: "din50929_z5",
        code: "Z5",
        name: LocalizedName { en: "Acid capacity to pH 4.3", de: "Saeurekapazitaet bis pH 4,3" },
        unit: "mmol/kg",
        bounds_description: ">= 0 mmol/kg",
        ranges: Z5_RANGES,
    },
    RatingParameter {
        id: "din50929_z6",
        code: "Z6",
        name: LocalizedName { en: "Carbonate content", de: "Kalkgehalt" },
        unit: "%",
        bounds_description: "0-100 %",
        ranges: Z6_RANGES,
    },
    RatingParameter {
        id: "din50929_z7",
        code: "Z7",
        name: LocalizedName { en: "Sulfide content", de: "Sulfidgehalt" },
        unit: "mg/kg",
        bounds_description: ">= 0 mg/kg",
        ranges: Z7_RANGES,
    },
    RatingParameter {
        id: "din50929_z8",
        code: "Z8",
        name: LocalizedName {
            en: "Neutral salts (chloride and sulfate)",
            de: "Neutralsalze (Chlorid und Sulfat)",
        },
        unit: "mmol/kg",
        bounds_description: ">= 0 mmol/kg",
        ranges: Z8_RANGES,
    },
    RatingParameter {
        id: "din50929_z9",
        code: "Z9",
        name: LocalizedName { en: "Sulfate content", de: "Sulfatgehalt" },
        unit: "mmol/kg",
        bounds_description: ">= 0 mmol/kg",
        ranges: Z9_RANGES,
    },
    RatingParameter {
        id: "din50929_z10",
        code: "Z10",
        name: LocalizedName { en: "Groundwater at installation", de: "Grundwasser am Objekt" },
        unit: "-",
        bounds_description: "none | constant | fluctuating",
        ranges: Z10_RANGES,
    },
];

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// All parameters of the standard, in display order.
pub fn parameters() -> &'static [RatingParameter] {
    PARAMETERS
}

/// Look up a parameter by its display code (exact match, e.g. "Z3").
pub fn parameter_by_code(code: &str) -> Option<&'static RatingParameter> {
    PARAMETERS.iter().find(|p| p.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_parameter_count_and_codes() {
        assert_eq!(PARAMETERS.len(), 10);
        for (i, parameter) in PARAMETERS.iter().enumerate() {
            assert_eq!(parameter.code, format!("Z{}", i + 1));
        }
    }

    #[test]
    fn test_codes_and_ids_unique() {
        for a in 0..PARAMETERS.len() {
            for b in a + 1..PARAMETERS.len() {
                assert_ne!(PARAMETERS[a].code, PARAMETERS[b].code);
                assert_ne!(PARAMETERS[a].id, PARAMETERS[b].id);
            }
        }
    }

    /// Numeric tiers form contiguous half-open intervals starting at 0,
    /// with the last numeric tier unbounded above.
    #[test]
    fn test_numeric_tiers_contiguous() {
        for parameter in PARAMETERS {
            let numeric: Vec<&RatingRange> = parameter
                .ranges
                .iter()
                .filter(|r| matches!(r.lower, RatingBound::Numeric(_)))
                .collect();

            if numeric.is_empty() {
                continue; // Z10 is fully categorical
            }

            assert_eq!(
                numeric[0].lower,
                RatingBound::Numeric(0.0),
                "{} first tier should start at 0",
                parameter.code
            );
            assert!(
                numeric.last().unwrap().upper.is_none(),
                "{} last numeric tier should be unbounded",
                parameter.code
            );

            for window in numeric.windows(2) {
                let upper = window[0].upper.unwrap_or_else(|| {
                    panic!("{} has a bounded tier after an unbounded one", parameter.code)
                });
                let next_lower = match window[1].lower {
                    RatingBound::Numeric(v) => v,
                    RatingBound::Token(_) => unreachable!(),
                };
                assert_abs_diff_eq!(upper, next_lower);
            }
        }
    }

    /// Categorical tiers carry no numeric upper bound.
    #[test]
    fn test_categorical_tiers_have_no_upper_bound() {
        for parameter in PARAMETERS {
            for range in parameter.ranges {
                if matches!(range.lower, RatingBound::Token(_)) {
                    assert!(range.upper.is_none(), "{} token tier has an upper bound", parameter.code);
                }
            }
        }
    }

    #[test]
    fn test_z1_keeps_impurities_sentinel_last() {
        let z1 = parameter_by_code("Z1").unwrap();
        let last = z1.ranges.last().unwrap();
        assert_eq!(last.lower, RatingBound::Token("impurities"));
        assert_eq!(last.score, -12);
    }

    #[test]
    fn test_localized_name_fallback() {
        let z3 = parameter_by_code("Z3").unwrap();
        assert_eq!(z3.name.display("de"), "Wassergehalt");
        assert_eq!(z3.name.display("en"), "Water content");
        assert_eq!(z3.name.display("fr"), "Water content");
        assert_eq!(z3.name.get("fr"), None);
    }

    #[test]
    fn test_lookup_by_code() {
        assert!(parameter_by_code("Z10").is_some());
        assert!(parameter_by_code("Z11").is_none());
        assert!(parameter_by_code("z3").is_none()); // case-sensitive
    }
}
