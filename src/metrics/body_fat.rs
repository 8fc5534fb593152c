//! Body fat estimation
//!
//! US Navy circumference method (Hodgdon & Beckett, 1984), metric form with
//! base-10 logarithms. Inputs are in centimeters.

use super::rounding::round_to_tenth;
use crate::models::Sex;

/// Estimated body fat percentage, one decimal.
///
/// Returns `None` when the circumference difference the logarithm needs is
/// not positive, when a female estimate has no hip measurement, when the
/// estimate comes out at or below zero, or for `Sex::Other`.
pub fn compute_body_fat(
    height_cm: f64,
    neck_cm: f64,
    waist_cm: f64,
    hip_cm: Option<f64>,
    sex: Sex,
) -> Option<f64> {
    let density_term = match sex {
        Sex::Male => {
            if waist_cm <= neck_cm {
                return None;
            }
            1.0324 - 0.19077 * (waist_cm - neck_cm).log10() + 0.15456 * height_cm.log10()
        }
        Sex::Female => {
            let hip_cm = hip_cm?;
            let girth = waist_cm + hip_cm - neck_cm;
            if girth <= 0.0 {
                return None;
            }
            1.29579 - 0.35004 * girth.log10() + 0.221 * height_cm.log10()
        }
        Sex::Other => return None,
    };

    let body_fat = 495.0 / density_term - 450.0;
    if body_fat.is_finite() && body_fat > 0.0 {
        Some(round_to_tenth(body_fat))
    } else {
        None
    }
}
