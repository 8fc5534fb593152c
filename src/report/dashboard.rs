//! Dashboard report
//!
//! Assembles derived metrics, weight history and card text for the
//! presentation layer.

use chrono::NaiveDate;
use serde::Serialize;

use crate::metrics::{
    bmi_gauge_percent, round_to_int, weight_history, weight_trend, BodyComposition, DerivedMetrics,
    WeightPoint, WeightTrend, WEIGHT_HISTORY_LEN,
};
use crate::models::{label_for_code, LatestMeasurements};
use crate::store::{DashboardSnapshot, SnapshotSource, StoreResult};

/// Placeholder shown when a value cannot be computed
pub const NO_DATA: &str = "No data";

/// Description shown when a derived value cannot be computed
pub const CANNOT_CALCULATE: &str = "Cannot calculate";

/// One dashboard card
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_percent: Option<i64>,
}

impl MetricCard {
    fn new(title: &str, value: Option<String>, description: &str) -> Self {
        Self {
            title: title.to_string(),
            value: value.unwrap_or_else(|| NO_DATA.to_string()),
            description: description.to_string(),
            progress_percent: None,
        }
    }

    fn with_progress(mut self, progress: i64) -> Self {
        self.progress_percent = Some(progress);
        self
    }
}

/// Everything the dashboard renders for one load
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub metrics: DerivedMetrics,
    pub latest: LatestMeasurements,
    pub weight_history: Vec<WeightPoint>,
    pub weight_trend: Option<WeightTrend>,
    pub body_composition: Option<BodyComposition>,
    pub bmi_gauge_percent: Option<i64>,
    pub cards: Vec<MetricCard>,
}

impl DashboardReport {
    /// Load a snapshot and build the report
    pub fn from_source<S: SnapshotSource>(source: &S, today: NaiveDate) -> StoreResult<Self> {
        let snapshot = source.load()?;
        Ok(Self::build(&snapshot, today))
    }

    /// Build the report from an already-fetched snapshot
    pub fn build(snapshot: &DashboardSnapshot, today: NaiveDate) -> Self {
        let latest = LatestMeasurements::resolve(&snapshot.measurements);
        let metrics = DerivedMetrics::evaluate(&snapshot.profile_or_default(), &latest, today);

        let weight_history = weight_history(&snapshot.measurements, WEIGHT_HISTORY_LEN);
        let weight_trend = weight_trend(&weight_history);

        let body_composition = match (latest.weight_kg, metrics.body_fat_percent) {
            (Some(w), Some(bf)) => Some(BodyComposition::from_measurements(w, bf)),
            _ => None,
        };
        let bmi_gauge_percent = metrics.bmi.map(|bmi| bmi_gauge_percent(bmi.value));

        let cards = build_cards(&latest, &metrics, bmi_gauge_percent);

        Self {
            metrics,
            latest,
            weight_history,
            weight_trend,
            body_composition,
            bmi_gauge_percent,
            cards,
        }
    }

    /// Look up a card by title
    pub fn card(&self, title: &str) -> Option<&MetricCard> {
        self.cards.iter().find(|card| card.title == title)
    }
}

fn build_cards(
    latest: &LatestMeasurements,
    metrics: &DerivedMetrics,
    bmi_gauge: Option<i64>,
) -> Vec<MetricCard> {
    let kg = |v: f64| format!("{} kg", v);
    let cm = |v: f64| format!("{} cm", v);
    let kcal = |v: i64| format!("{} kcal", format_thousands(v));
    let grams = |v: i64| format!("{}g", v);

    let macros = metrics.macros;

    let bmi_card = MetricCard::new(
        "BMI",
        metrics.bmi.map(|bmi| bmi.value.to_string()),
        metrics
            .bmi
            .map(|bmi| bmi.status.display_name())
            .unwrap_or(CANNOT_CALCULATE),
    )
    .with_progress(bmi_gauge.unwrap_or(0));

    let body_fat_card = MetricCard::new(
        "Body Fat %",
        metrics.body_fat_percent.map(|bf| format!("{}%", bf)),
        if metrics.body_fat_percent.is_some() {
            "Estimated"
        } else {
            CANNOT_CALCULATE
        },
    )
    .with_progress(metrics.body_fat_percent.map(round_to_int).unwrap_or(0));

    vec![
        MetricCard::new("Weight", latest.weight_kg.map(kg), "Current weight"),
        MetricCard::new("Height", latest.height_cm.map(cm), "Current height"),
        MetricCard::new("BMR", metrics.bmr.map(kcal), "Basal metabolic rate"),
        MetricCard::new("TDEE", metrics.tdee.map(kcal), "Total daily energy expenditure"),
        MetricCard::new("Waist", latest.waist_cm.map(cm), "Waist measurement"),
        MetricCard::new("Hip", latest.hip_cm.map(cm), "Hip measurement"),
        MetricCard::new("Neck", latest.neck_cm.map(cm), "Neck measurement"),
        MetricCard::new(
            "Activity Level",
            latest.activity_level.map(|code| label_for_code(code).to_string()),
            "Current activity level",
        ),
        bmi_card,
        body_fat_card,
        MetricCard::new("Protein", macros.map(|m| grams(m.protein_g)), "25% of calories"),
        MetricCard::new("Fat", macros.map(|m| grams(m.fat_g)), "30% of calories"),
        MetricCard::new("Carbs", macros.map(|m| grams(m.carbs_g)), "45% of calories"),
        MetricCard::new(
            "Lean Body Mass",
            metrics.lean_body_mass_kg.map(kg),
            if metrics.lean_body_mass_kg.is_some() {
                "Fat-free weight"
            } else {
                CANNOT_CALCULATE
            },
        ),
        MetricCard::new(
            "Water Requirement",
            metrics.water_intake_ml.map(|ml| format!("{} ml", format_thousands(ml))),
            "Recommended per day",
        ),
        MetricCard::new(
            "Ideal Body Weight",
            metrics.ideal_body_weight_kg.map(kg),
            "Based on Devine Formula",
        ),
    ]
}

/// Group digits with commas (2406 -> "2,406")
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Measurement, Profile, Sex};
    use chrono::{TimeZone, Utc};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn snapshot() -> DashboardSnapshot {
        let at = |day: u32| Utc.with_ymd_and_hms(2026, 10, day, 8, 0, 0).unwrap();
        DashboardSnapshot {
            profile: Some(Profile::new(
                Sex::Male,
                NaiveDate::from_ymd_opt(1990, 6, 1).unwrap(),
            )),
            measurements: vec![
                Measurement {
                    weight_kg: Some(82.0),
                    height_cm: Some(180.0),
                    waist_cm: Some(85.0),
                    neck_cm: Some(38.0),
                    activity_level: Some(2),
                    ..Measurement::at(at(1))
                },
                Measurement {
                    weight_kg: Some(80.0),
                    ..Measurement::at(at(15))
                },
            ],
        }
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(2406), "2,406");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-1500), "-1,500");
    }

    #[test]
    fn test_build_full_report() {
        let report = DashboardReport::build(&snapshot(), today());

        assert_eq!(report.latest.weight_kg, Some(80.0));
        assert_eq!(report.metrics.bmr, Some(1750));
        assert_eq!(report.weight_history.len(), 2);

        let trend = report.weight_trend.as_ref().unwrap();
        assert!(!trend.is_up);
        assert_eq!(trend.change_kg, 2.0);

        let comp = report.body_composition.unwrap();
        assert_eq!(comp.lean_mass_kg, 67.1);
        assert_eq!(report.bmi_gauge_percent, Some(62));

        assert_eq!(report.card("Weight").unwrap().value, "80 kg");
        assert_eq!(report.card("TDEE").unwrap().value, "2,406 kcal");
        assert_eq!(report.card("Activity Level").unwrap().value, "Lightly Active");
        assert_eq!(report.card("BMI").unwrap().description, "Normal weight");
        assert_eq!(report.card("Body Fat %").unwrap().value, "16.1%");
        assert_eq!(report.card("Water Requirement").unwrap().value, "2,800 ml");
    }

    #[test]
    fn test_empty_snapshot_shows_placeholders() {
        let report = DashboardReport::build(&DashboardSnapshot::default(), today());

        assert!(report.cards.iter().all(|card| card.value == NO_DATA));
        assert_eq!(report.card("BMI").unwrap().description, CANNOT_CALCULATE);
        assert_eq!(report.card("BMI").unwrap().progress_percent, Some(0));
        assert!(report.weight_trend.is_none());
        assert!(report.body_composition.is_none());
    }

    #[test]
    fn test_unknown_activity_code_label() {
        let mut snap = snapshot();
        snap.measurements[0].activity_level = Some(9);
        let report = DashboardReport::build(&snap, today());

        assert_eq!(report.card("Activity Level").unwrap().value, "Unknown");
        // Unknown codes fall back to the sedentary factor
        assert_eq!(report.metrics.tdee, Some(2100));
    }

    #[test]
    fn test_from_source() {
        let report = DashboardReport::from_source(&snapshot(), today()).unwrap();
        assert_eq!(report.cards.len(), 16);
    }
}
