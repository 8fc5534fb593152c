//! Activity level model
//!
//! Numeric activity levels (1-4) as recorded with a measurement, and the
//! multipliers used to scale BMR into daily energy expenditure.

use serde::{Deserialize, Serialize};

/// Multiplier used when no (or an unrecognized) activity level is on record
pub const SEDENTARY_FACTOR: f64 = 1.2;

/// Activity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
}

impl ActivityLevel {
    /// Map a stored numeric code to a level
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(ActivityLevel::Sedentary),
            2 => Some(ActivityLevel::LightlyActive),
            3 => Some(ActivityLevel::ModeratelyActive),
            4 => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
        }
    }

    /// TDEE multiplier for this level
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => SEDENTARY_FACTOR,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
        }
    }
}

/// Multiplier for an optional raw code, falling back to sedentary
pub fn factor_for_code(code: Option<i64>) -> f64 {
    code.and_then(ActivityLevel::from_code)
        .map(|level| level.factor())
        .unwrap_or(SEDENTARY_FACTOR)
}

/// Display label for a raw code ("Unknown" when out of range)
pub fn label_for_code(code: i64) -> &'static str {
    ActivityLevel::from_code(code)
        .map(|level| level.display_name())
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(ActivityLevel::from_code(1), Some(ActivityLevel::Sedentary));
        assert_eq!(ActivityLevel::from_code(2), Some(ActivityLevel::LightlyActive));
        assert_eq!(ActivityLevel::from_code(3), Some(ActivityLevel::ModeratelyActive));
        assert_eq!(ActivityLevel::from_code(4), Some(ActivityLevel::VeryActive));
        assert_eq!(ActivityLevel::from_code(0), None);
        assert_eq!(ActivityLevel::from_code(5), None);
    }

    #[test]
    fn test_factor_fallback() {
        assert_eq!(factor_for_code(Some(1)), 1.2);
        assert_eq!(factor_for_code(Some(2)), 1.375);
        assert_eq!(factor_for_code(Some(3)), 1.55);
        assert_eq!(factor_for_code(Some(4)), 1.725);
        assert_eq!(factor_for_code(Some(7)), SEDENTARY_FACTOR);
        assert_eq!(factor_for_code(Some(-1)), SEDENTARY_FACTOR);
        assert_eq!(factor_for_code(None), SEDENTARY_FACTOR);
    }

    #[test]
    fn test_labels() {
        assert_eq!(label_for_code(1), "Sedentary");
        assert_eq!(label_for_code(3), "Moderately Active");
        assert_eq!(label_for_code(9), "Unknown");
    }
}
