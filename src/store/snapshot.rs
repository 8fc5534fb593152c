//! Dashboard snapshot loading
//!
//! One batched read of everything the dashboard needs: the profile and the
//! measurement history for a user.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Measurement, Profile};

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Snapshot not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Snapshot read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Profile and measurement rows fetched together
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub measurements: Vec<Measurement>,
}

impl DashboardSnapshot {
    /// Parse a snapshot from JSON text
    pub fn from_json(text: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// The profile, or an empty one when none is on record
    pub fn profile_or_default(&self) -> Profile {
        self.profile.clone().unwrap_or_default()
    }
}

/// Anything that can hand over a dashboard snapshot in one call
pub trait SnapshotSource {
    fn load(&self) -> StoreResult<DashboardSnapshot>;
}

impl SnapshotSource for DashboardSnapshot {
    fn load(&self) -> StoreResult<DashboardSnapshot> {
        Ok(self.clone())
    }
}

/// Snapshot exported to a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSource for JsonFileSource {
    fn load(&self) -> StoreResult<DashboardSnapshot> {
        if !self.path.exists() {
            return Err(StoreError::NotFound(self.path.clone()));
        }

        let text = fs::read_to_string(&self.path)?;
        let snapshot = DashboardSnapshot::from_json(&text)?;

        tracing::debug!(
            path = %self.path.display(),
            measurements = snapshot.measurements.len(),
            has_profile = snapshot.profile.is_some(),
            "Loaded dashboard snapshot"
        );

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::DerivedMetrics;
    use crate::models::{LatestMeasurements, Sex};
    use chrono::NaiveDate;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "profile": { "sex": "male", "dateOfBirth": "1990-06-01" },
        "measurements": [
            { "weightKg": 81.2, "heightCm": 180, "activityLevel": 2,
              "recordedAt": "2026-09-01T08:00:00Z" },
            { "weightKg": 80.4, "waistCm": 86.5, "neckCm": 38, "hipCm": null,
              "recordedAt": "2026-10-01T08:00:00Z" }
        ]
    }"#;

    #[test]
    fn test_parse_snapshot() {
        let snapshot = DashboardSnapshot::from_json(SNAPSHOT).unwrap();
        assert_eq!(snapshot.profile.as_ref().unwrap().sex, Some(Sex::Male));
        assert_eq!(snapshot.measurements.len(), 2);
        assert_eq!(snapshot.measurements[0].height_cm, Some(180.0));
        assert_eq!(snapshot.measurements[1].hip_cm, None);
        assert_eq!(snapshot.measurements[1].activity_level, None);
    }

    #[test]
    fn test_parse_empty_snapshot() {
        let snapshot = DashboardSnapshot::from_json("{}").unwrap();
        assert_eq!(snapshot, DashboardSnapshot::default());
        assert_eq!(snapshot.profile_or_default(), Profile::default());
    }

    #[test]
    fn test_unrecognized_values_only_blank_dependent_metrics() {
        let snapshot = DashboardSnapshot::from_json(
            r#"{
                "profile": { "sex": "robot", "dateOfBirth": "1990-06-01" },
                "measurements": [
                    { "weightKg": 80, "heightCm": 180, "activityLevel": "often",
                      "recordedAt": "2026-10-01T08:00:00Z" }
                ]
            }"#,
        )
        .unwrap();

        let latest = LatestMeasurements::resolve(&snapshot.measurements);
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let metrics = DerivedMetrics::evaluate(&snapshot.profile_or_default(), &latest, today);

        assert_eq!(metrics.bmi.map(|bmi| bmi.value), Some(24.7));
        assert_eq!(metrics.water_intake_ml, Some(2800));
        assert_eq!(metrics.age, Some(36));
        assert_eq!(metrics.bmr, None);
        assert_eq!(metrics.ideal_body_weight_kg, None);
    }

    #[test]
    fn test_parse_capitalized_sex_and_float_activity_level() {
        let snapshot = DashboardSnapshot::from_json(
            r#"{
                "profile": { "sex": "Male", "dateOfBirth": "1990-06-01" },
                "measurements": [
                    { "weightKg": 80, "heightCm": 180, "activityLevel": 2.0,
                      "recordedAt": "2026-10-01T08:00:00Z" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(snapshot.profile_or_default().sex, Some(Sex::Male));
        assert_eq!(snapshot.measurements[0].activity_level, Some(2));
    }

    #[test]
    fn test_file_source_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let source = JsonFileSource::new(file.path());
        assert_eq!(source.path(), file.path());
        let snapshot = source.load().unwrap();
        assert_eq!(snapshot.measurements.len(), 2);
    }

    #[test]
    fn test_file_source_missing() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("missing.json"));
        assert!(matches!(source.load(), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_snapshot_is_its_own_source() {
        let snapshot = DashboardSnapshot::from_json(SNAPSHOT).unwrap();
        assert_eq!(snapshot.load().unwrap(), snapshot);
    }
}
