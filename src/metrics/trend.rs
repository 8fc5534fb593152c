//! Weight history and trend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::rounding::round_to_tenth;
use crate::models::{usable, Measurement};

/// Number of weight readings shown in the history
pub const WEIGHT_HISTORY_LEN: usize = 6;

/// One weight reading in the history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightPoint {
    pub recorded_at: DateTime<Utc>,
    pub weight_kg: f64,
}

/// Change between the first and last reading of a history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightTrend {
    /// Absolute change in kg, one decimal
    pub change_kg: f64,
    /// Absolute change relative to the first reading, one decimal
    pub percent: f64,
    pub is_up: bool,
}

/// The most recent `limit` weight readings, oldest first
pub fn weight_history(rows: &[Measurement], limit: usize) -> Vec<WeightPoint> {
    let mut points: Vec<WeightPoint> = rows
        .iter()
        .filter_map(|row| {
            usable(row.weight_kg).map(|weight_kg| WeightPoint {
                recorded_at: row.recorded_at,
                weight_kg,
            })
        })
        .collect();

    points.sort_by_key(|p| p.recorded_at);
    let skip = points.len().saturating_sub(limit);
    points.split_off(skip)
}

/// Trend across a chronological history; needs at least two readings
pub fn weight_trend(history: &[WeightPoint]) -> Option<WeightTrend> {
    if history.len() < 2 {
        return None;
    }
    let first = history.first()?.weight_kg;
    let last = history.last()?.weight_kg;
    let change = last - first;

    Some(WeightTrend {
        change_kg: round_to_tenth(change.abs()),
        percent: round_to_tenth((change / first * 100.0).abs()),
        is_up: change > 0.0,
    })
}
