//! Measurement model
//!
//! Body measurement rows as stored by the measurement store, the submission
//! shape for a new row, and per-field resolution of the latest values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::activity::ActivityLevel;

/// Validation error for a new measurement submission
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be a positive number, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("activity level must be between 1 and 4, got {0}")]
    ActivityLevelOutOfRange(i64),
}

/// A stored measurement row. Every field is independently optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub waist_cm: Option<f64>,
    #[serde(default)]
    pub neck_cm: Option<f64>,
    #[serde(default)]
    pub hip_cm: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_activity_level")]
    pub activity_level: Option<i64>,
    pub recorded_at: DateTime<Utc>,
}

impl Measurement {
    /// An empty row recorded at the given time
    pub fn at(recorded_at: DateTime<Utc>) -> Self {
        Self {
            weight_kg: None,
            height_cm: None,
            waist_cm: None,
            neck_cm: None,
            hip_cm: None,
            activity_level: None,
            recorded_at,
        }
    }
}

/// Data for submitting a new measurement
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementCreate {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub waist_cm: Option<f64>,
    pub neck_cm: Option<f64>,
    pub hip_cm: Option<f64>,
    pub activity_level: Option<i64>,
}

impl MeasurementCreate {
    /// Check the submission; the first failing field is reported
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("weight", self.weight_kg),
            ("height", self.height_cm),
            ("waist", self.waist_cm),
            ("neck", self.neck_cm),
        ];
        for (field, value) in required {
            match value {
                None => return Err(ValidationError::MissingField(field)),
                Some(v) => check_positive(field, v)?,
            }
        }

        if let Some(hip) = self.hip_cm {
            check_positive("hip", hip)?;
        }

        if let Some(code) = self.activity_level {
            if ActivityLevel::from_code(code).is_none() {
                return Err(ValidationError::ActivityLevelOutOfRange(code));
            }
        }

        Ok(())
    }

    /// Validate and build the row to hand to the store
    pub fn into_measurement(
        self,
        recorded_at: DateTime<Utc>,
    ) -> Result<Measurement, ValidationError> {
        self.validate()?;
        Ok(Measurement {
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            waist_cm: self.waist_cm,
            neck_cm: self.neck_cm,
            hip_cm: self.hip_cm,
            activity_level: self.activity_level,
            recorded_at,
        })
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositive { field, value })
    }
}

/// Read a stored activity level leniently
///
/// Integral numbers (`2` or `2.0`) are accepted; anything else is treated as absent.
fn deserialize_activity_level<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let code = match &raw {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::Number(n)) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Some(_) => None,
    };
    if code.is_none() {
        if let Some(value) = raw.as_ref().filter(|v| !v.is_null()) {
            tracing::warn!(%value, "Unrecognized activity level, treating as absent");
        }
    }
    Ok(code)
}

/// Keep a value only if it is a usable positive real
pub fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Latest known value of each measurement field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestMeasurements {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub waist_cm: Option<f64>,
    pub neck_cm: Option<f64>,
    pub hip_cm: Option<f64>,
    pub activity_level: Option<i64>,
}

impl LatestMeasurements {
    /// Resolve each field from the most recent row that carries a usable value for it.
    ///
    /// Rows may arrive in any order. On equal timestamps the row appearing later wins.
    pub fn resolve(rows: &[Measurement]) -> Self {
        let mut ordered: Vec<&Measurement> = rows.iter().collect();
        // Stable sort, so later rows stay later among equal timestamps
        ordered.sort_by_key(|row| row.recorded_at);

        let latest_f64 = |pick: fn(&Measurement) -> Option<f64>| {
            ordered.iter().rev().find_map(|row| usable(pick(*row)))
        };

        Self {
            weight_kg: latest_f64(|m| m.weight_kg),
            height_cm: latest_f64(|m| m.height_cm),
            waist_cm: latest_f64(|m| m.waist_cm),
            neck_cm: latest_f64(|m| m.neck_cm),
            hip_cm: latest_f64(|m| m.hip_cm),
            activity_level: ordered.iter().rev().find_map(|row| row.activity_level),
        }
    }
}
