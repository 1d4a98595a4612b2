//! Unit conversion helpers
//!
//! Profiles are entered in imperial units (pounds, feet and inches) while every
//! formula works in SI. These helpers are the only place the conversion factors live.
//!
//! # Design Principles
//!
//! 1. **Absence over zero**: a height with no usable value is `None`, never `0.0`
//! 2. **No panics**: non-finite sub-fields are treated as missing
//! 3. **Leaf utilities**: nothing here depends on the rest of the crate

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Conversion Factors
// ============================================================================

/// Kilograms per pound
pub const LB_TO_KG: f64 = 0.453592;

/// Centimeters per inch
pub const INCH_TO_CM: f64 = 2.54;

/// Meters per inch
pub const INCH_TO_M: f64 = 0.0254;

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Convert pounds to kilograms
pub fn pounds_to_kg(lbs: f64) -> f64 {
    lbs * LB_TO_KG
}

/// Convert kilograms to pounds
pub fn kg_to_pounds(kg: f64) -> f64 {
    kg / LB_TO_KG
}

/// Convert inches to centimeters
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * INCH_TO_CM
}

/// Convert inches to meters
pub fn inches_to_m(inches: f64) -> f64 {
    inches * INCH_TO_M
}

// ============================================================================
// Height
// ============================================================================

/// Height as entered in the profile form: feet plus inches, each independently optional
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Height {
    pub ft: Option<f64>,
    #[serde(rename = "in")]
    pub inches: Option<f64>,
}

impl Height {
    /// Create a height from both sub-fields
    pub fn new(ft: f64, inches: f64) -> Self {
        Self {
            ft: Some(ft),
            inches: Some(inches),
        }
    }

    /// Total height in inches
    ///
    /// A missing or non-finite sub-field counts as zero. When both sub-fields are
    /// effectively zero the height is considered unset and `None` is returned.
    pub fn total_inches(&self) -> Option<f64> {
        let ft = finite_or_zero(self.ft);
        let inches = finite_or_zero(self.inches);
        if ft == 0.0 && inches == 0.0 {
            return None;
        }
        Some(ft * INCHES_PER_FOOT + inches)
    }

    /// Whether at least one sub-field has been filled in
    pub fn has_any_value(&self) -> bool {
        self.ft.is_some() || self.inches.is_some()
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}'{}\"",
            finite_or_zero(self.ft),
            finite_or_zero(self.inches)
        )
    }
}

/// Total inches of an optional height; `None` when the height is missing or unset
pub fn total_inches(height: Option<&Height>) -> Option<f64> {
    height.and_then(Height::total_inches)
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_weight_conversions() {
        // 100 lbs = 45.3592 kg
        assert!((pounds_to_kg(100.0) - 45.3592).abs() < 1e-9);
        // 1 kg = 2.20462 lbs
        assert!((kg_to_pounds(1.0) - 2.20462).abs() < 0.001);
    }

    #[test]
    fn test_known_height_conversions() {
        // 70 inches = 177.8 cm = 1.778 m
        assert!((inches_to_cm(70.0) - 177.8).abs() < 1e-9);
        assert!((inches_to_m(70.0) - 1.778).abs() < 1e-9);
    }

    #[test]
    fn test_total_inches() {
        assert_eq!(Height::new(5.0, 10.0).total_inches(), Some(70.0));
        assert_eq!(Height { ft: Some(6.0), inches: None }.total_inches(), Some(72.0));
        assert_eq!(Height { ft: None, inches: Some(70.0) }.total_inches(), Some(70.0));
    }

    #[test]
    fn test_zero_height_is_unset() {
        assert_eq!(Height::new(0.0, 0.0).total_inches(), None);
        assert_eq!(Height::default().total_inches(), None);
        assert_eq!(total_inches(None), None);
    }

    #[test]
    fn test_non_finite_sub_field_counts_as_zero() {
        let height = Height {
            ft: Some(f64::NAN),
            inches: Some(8.0),
        };
        assert_eq!(height.total_inches(), Some(8.0));

        let height = Height {
            ft: Some(f64::INFINITY),
            inches: None,
        };
        assert_eq!(height.total_inches(), None);
    }

    #[test]
    fn test_height_serde_field_names() {
        let height: Height = serde_json::from_str(r#"{"ft":5,"in":null}"#).unwrap();
        assert_eq!(height.ft, Some(5.0));
        assert_eq!(height.inches, None);

        let json = serde_json::to_value(Height::new(6.0, 2.0)).unwrap();
        assert_eq!(json["in"], 2.0);
    }

    #[test]
    fn test_height_display() {
        assert_eq!(Height::new(6.0, 2.0).to_string(), "6'2\"");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: total inches grows with feet for a fixed inch value
        #[test]
        fn prop_total_inches_increases_with_feet(ft in 1.0f64..8.0, inches in 0.0f64..12.0) {
            let shorter = Height::new(ft, inches).total_inches().unwrap();
            let taller = Height::new(ft + 1.0, inches).total_inches().unwrap();
            prop_assert!((taller - shorter - INCHES_PER_FOOT).abs() < 1e-9);
        }
    }
}
