//! Body size metrics
//!
//! Age, BMI, ideal body weight (Devine), lean body mass and water intake.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::rounding::{round_to_int, round_to_tenth};
use crate::models::Sex;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Recommended water intake per kilogram of body weight (ml)
pub const WATER_ML_PER_KG: f64 = 35.0;

/// BMI classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiStatus {
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiStatus {
    /// Classify an unrounded BMI value
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiStatus::Underweight
        } else if bmi < 25.0 {
            BmiStatus::NormalWeight
        } else if bmi < 30.0 {
            BmiStatus::Overweight
        } else {
            BmiStatus::Obese
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BmiStatus::Underweight => "Underweight",
            BmiStatus::NormalWeight => "Normal weight",
            BmiStatus::Overweight => "Overweight",
            BmiStatus::Obese => "Obese",
        }
    }
}

/// BMI value (one decimal) with its classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bmi {
    pub value: f64,
    pub status: BmiStatus,
}

/// Whole years between a birth date and `today`
pub fn compute_age(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// Age as of the local wall-clock date
pub fn age_on_today(date_of_birth: NaiveDate) -> i32 {
    compute_age(date_of_birth, Local::now().date_naive())
}

/// Body Mass Index: weight / height(m)²
///
/// The status is taken from the unrounded value, so a BMI of 18.46 displays
/// as 18.5 but is still classified as underweight.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Bmi {
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Bmi {
        value: round_to_tenth(bmi),
        status: BmiStatus::classify(bmi),
    }
}

/// Ideal body weight via the Devine formula
///
/// Heights under 60 inches extrapolate linearly with no floor.
pub fn compute_ideal_body_weight(height_cm: f64, sex: Sex) -> Option<f64> {
    let base = match sex {
        Sex::Male => 50.0,
        Sex::Female => 45.5,
        Sex::Other => return None,
    };
    let height_in = height_cm / CM_PER_INCH;
    Some(round_to_tenth(base + 2.3 * (height_in - 60.0)))
}

/// Lean body mass from weight and body fat percentage
pub fn compute_lean_body_mass(weight_kg: f64, body_fat_percent: Option<f64>) -> Option<f64> {
    let body_fat = body_fat_percent?;
    Some(round_to_tenth(weight_kg * (100.0 - body_fat) / 100.0))
}

/// Daily water intake in milliliters
pub fn compute_water_intake(weight_kg: f64) -> i64 {
    round_to_int(weight_kg * WATER_ML_PER_KG)
}
