//! Derived metrics evaluation
//!
//! Computes every dashboard metric whose inputs are available. A missing
//! input only blanks the metrics that depend on it.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::body::{
    compute_age, compute_bmi, compute_ideal_body_weight, compute_lean_body_mass,
    compute_water_intake, Bmi,
};
use super::body_fat::compute_body_fat;
use super::energy::{compute_bmr, compute_macros, compute_tdee, Macros};
use crate::models::{usable, LatestMeasurements, Profile, Sex};

/// All derived metrics for one evaluation. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub age: Option<i32>,
    pub bmi: Option<Bmi>,
    pub bmr: Option<i64>,
    pub body_fat_percent: Option<f64>,
    pub tdee: Option<i64>,
    pub macros: Option<Macros>,
    pub lean_body_mass_kg: Option<f64>,
    pub ideal_body_weight_kg: Option<f64>,
    pub water_intake_ml: Option<i64>,
}

impl DerivedMetrics {
    /// Evaluate against the local wall-clock date
    pub fn evaluate_now(profile: &Profile, latest: &LatestMeasurements) -> Self {
        Self::evaluate(profile, latest, Local::now().date_naive())
    }

    /// Evaluate every metric whose inputs are present
    pub fn evaluate(profile: &Profile, latest: &LatestMeasurements, today: NaiveDate) -> Self {
        let weight = usable(latest.weight_kg);
        let height = usable(latest.height_cm);
        let waist = usable(latest.waist_cm);
        let neck = usable(latest.neck_cm);
        let hip = usable(latest.hip_cm);
        let sex = profile.sex;

        if sex == Some(Sex::Other) {
            tracing::debug!(
                "No formula branch for sex 'other'; BMR, body fat and ideal weight left empty"
            );
        }

        // A birth date in the future gives no age rather than a negative one
        let age = profile
            .date_of_birth
            .map(|dob| compute_age(dob, today))
            .filter(|age| *age >= 0);

        let bmi = match (weight, height) {
            (Some(w), Some(h)) => Some(compute_bmi(w, h)),
            _ => None,
        };

        let bmr = match (weight, height, age, sex) {
            (Some(w), Some(h), Some(a), Some(s)) => compute_bmr(w, h, a, s),
            _ => None,
        };

        let body_fat_percent = match (height, neck, waist, sex) {
            (Some(h), Some(n), Some(wa), Some(s)) => compute_body_fat(h, n, wa, hip, s),
            _ => None,
        };

        let tdee = bmr.map(|bmr| compute_tdee(bmr, latest.activity_level));
        let macros = tdee.map(compute_macros);

        let lean_body_mass_kg = weight.and_then(|w| compute_lean_body_mass(w, body_fat_percent));

        let ideal_body_weight_kg = match (height, sex) {
            (Some(h), Some(s)) => compute_ideal_body_weight(h, s),
            _ => None,
        };

        Self {
            age,
            bmi,
            bmr,
            body_fat_percent,
            tdee,
            macros,
            lean_body_mass_kg,
            ideal_body_weight_kg,
            water_intake_ml: weight.map(compute_water_intake),
        }
    }
}
