//! Data models
//!
//! Rust structs representing profile and measurement records.

mod activity;
mod measurement;
mod profile;

pub use activity::{factor_for_code, label_for_code, ActivityLevel, SEDENTARY_FACTOR};
pub use measurement::{
    usable, LatestMeasurements, Measurement, MeasurementCreate, ValidationError,
};
pub use profile::{Profile, Sex};
