//! Metrics engine
//!
//! Pure formulas turning a profile and measurements into derived health
//! metrics. Nothing here performs I/O or keeps state between calls.

pub mod body;
pub mod body_fat;
pub mod composition;
pub mod derived;
pub mod energy;
pub mod rounding;
pub mod trend;

pub use body::{
    age_on_today, compute_age, compute_bmi, compute_ideal_body_weight, compute_lean_body_mass,
    compute_water_intake, Bmi, BmiStatus,
};
pub use body_fat::compute_body_fat;
pub use composition::{bmi_gauge_percent, BodyComposition};
pub use derived::DerivedMetrics;
pub use energy::{compute_bmr, compute_macros, compute_tdee, Macros};
pub use rounding::{round_half_up, round_to_int, round_to_tenth};
pub use trend::{weight_history, weight_trend, WeightPoint, WeightTrend, WEIGHT_HISTORY_LEN};
