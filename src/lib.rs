//! Fitness Dashboard (fitdash) Library
//!
//! Derived health metrics (BMI, BMR, TDEE, body fat, macros, lean body mass,
//! ideal body weight, water intake) from a profile and body measurements.

pub mod build_info;
pub mod metrics;
pub mod models;
pub mod report;
pub mod store;
