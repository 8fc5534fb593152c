//! Profile model
//!
//! The user's sex and date of birth, as read from the profile store.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Sex as recorded on the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Sex::Male),
            "female" | "f" => Some(Sex::Female),
            "other" => Some(Sex::Other),
            _ => None,
        }
    }
}

/// Profile information used by the metrics engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, deserialize_with = "deserialize_sex")]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
}

impl Profile {
    pub fn new(sex: Sex, date_of_birth: NaiveDate) -> Self {
        Self {
            sex: Some(sex),
            date_of_birth: Some(date_of_birth),
        }
    }
}

/// Read a stored sex value leniently; anything unrecognized is treated as absent
fn deserialize_sex<'de, D>(deserializer: D) -> Result<Option<Sex>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let sex = match raw {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => {
            let parsed = Sex::from_str(&s);
            if parsed.is_none() {
                tracing::warn!(value = %s, "Unrecognized sex on profile, treating as absent");
            }
            parsed
        }
        Some(other) => {
            tracing::warn!(value = %other, "Unrecognized sex on profile, treating as absent");
            None
        }
    };
    Ok(sex)
}
