//! Energy expenditure and macronutrient targets
//!
//! - BMR: Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2), 241-247.
//! - TDEE: BMR scaled by an activity multiplier (1.2 - 1.725).
//! - Macros: fixed 25/30/45 protein/fat/carbohydrate calorie split.

use serde::{Deserialize, Serialize};

use super::rounding::round_to_int;
use crate::models::{factor_for_code, Sex};

/// kcal per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// kcal per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;
/// kcal per gram of carbohydrate
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// Share of daily calories from protein
pub const PROTEIN_SHARE: f64 = 0.25;
/// Share of daily calories from fat
pub const FAT_SHARE: f64 = 0.30;
/// Share of daily calories from carbohydrate
pub const CARBS_SHARE: f64 = 0.45;

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Macros {
    pub protein_g: i64,
    pub fat_g: i64,
    pub carbs_g: i64,
}

/// Basal metabolic rate (kcal/day), Mifflin-St Jeor
pub fn compute_bmr(weight_kg: f64, height_cm: f64, age: i32, sex: Sex) -> Option<i64> {
    let sex_offset = match sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
        Sex::Other => return None,
    };
    let bmr = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + sex_offset;
    Some(round_to_int(bmr))
}

/// Total daily energy expenditure (kcal/day)
///
/// A missing or unrecognized activity level uses the sedentary factor.
pub fn compute_tdee(bmr: i64, activity_level: Option<i64>) -> i64 {
    round_to_int(bmr as f64 * factor_for_code(activity_level))
}

/// Split daily calories into gram targets; each macro is rounded on its own
pub fn compute_macros(tdee: i64) -> Macros {
    let kcal = tdee as f64;
    Macros {
        protein_g: round_to_int(kcal * PROTEIN_SHARE / KCAL_PER_G_PROTEIN),
        fat_g: round_to_int(kcal * FAT_SHARE / KCAL_PER_G_FAT),
        carbs_g: round_to_int(kcal * CARBS_SHARE / KCAL_PER_G_CARBS),
    }
}
