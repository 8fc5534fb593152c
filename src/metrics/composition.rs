//! Body composition split and BMI gauge

use serde::{Deserialize, Serialize};

use super::rounding::{round_to_int, round_to_tenth};

/// BMI value at which the gauge is full
pub const BMI_GAUGE_MAX: f64 = 40.0;

/// Fat and lean mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyComposition {
    pub fat_mass_kg: f64,
    pub lean_mass_kg: f64,
}

impl BodyComposition {
    /// Split body weight using a body fat percentage
    pub fn from_measurements(weight_kg: f64, body_fat_percent: f64) -> Self {
        let fat_mass = weight_kg * body_fat_percent / 100.0;
        Self {
            fat_mass_kg: round_to_tenth(fat_mass),
            lean_mass_kg: round_to_tenth(weight_kg - fat_mass),
        }
    }
}

/// How full the BMI gauge is, 0-100
pub fn bmi_gauge_percent(bmi: f64) -> i64 {
    round_to_int(bmi.clamp(0.0, BMI_GAUGE_MAX) / BMI_GAUGE_MAX * 100.0)
}
