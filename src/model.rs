//! Listing data for the lot map.
//! The project post comes from the WordPress admin (ACF fields); only the
//! parts the map needs are typed, the rest of each house record is kept as-is
//! so the selection callback can hand it to the page untouched.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::MapError;

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

/// Sale status of a lot, from the admin's `status_hose` code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LotStatus {
    Available,
    Reserved,
    SoldOut,
    Unknown,
}

impl LotStatus {
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "1" => Self::Available,
            "2" => Self::Reserved,
            "0" => Self::SoldOut,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Reserved => "RESERVED",
            Self::SoldOut => "SOLD OUT",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Fill applied to the lot's paths; available lots keep the SVG colours.
    #[must_use]
    pub fn fill_color(self) -> Option<&'static str> {
        match self {
            Self::Reserved => Some("#A7A7A7"),
            Self::SoldOut => Some("#FF6230"),
            Self::Available | Self::Unknown => None,
        }
    }
}

/// One house lot from the listing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Lot {
    #[serde(deserialize_with = "string_or_number")]
    pub lot_number: String,
    #[serde(rename = "status_hose", default, deserialize_with = "string_or_number")]
    pub status_code: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Lot {
    /// Id of the lot's group in the map SVG.
    #[must_use]
    pub fn element_id(&self) -> String {
        format!("id{}", self.lot_number)
    }

    #[must_use]
    pub fn status(&self) -> LotStatus {
        LotStatus::from_code(&self.status_code)
    }

    /// Scalar listing fields, sorted by key, for display.
    pub fn display_fields(&self) -> impl Iterator<Item = (&str, String)> {
        self.details.iter().filter_map(|(k, v)| {
            let text = match v {
                Value::String(s) if !s.is_empty() => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((k.as_str(), text))
        })
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProjectPost {
    #[serde(default)]
    pub acf: ProjectFields,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProjectFields {
    #[serde(default, deserialize_with = "seq_or_empty")]
    pub phase_group: Vec<Phase>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Phase {
    /// `"1"` active, `"0"` not active.
    #[serde(default, deserialize_with = "string_or_number")]
    pub statuses_phase: String,
    #[serde(default, deserialize_with = "seq_or_empty")]
    pub group_houses_phase: Vec<HouseGroup>,
}

impl Phase {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.statuses_phase.trim() == "1"
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct HouseGroup {
    #[serde(default, deserialize_with = "seq_or_empty")]
    pub houses_group: Vec<HouseEntry>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct HouseEntry {
    /// `None` when the admin row is incomplete; the rest of the listing
    /// still loads.
    #[serde(default, deserialize_with = "lot_or_none")]
    pub house: Option<Lot>,
}

impl ProjectPost {
    pub fn from_json(raw: &str) -> Result<Self, MapError> {
        serde_json::from_str(raw).map_err(MapError::Listing)
    }

    /// Lots of every active phase, in listing order.
    #[must_use]
    pub fn active_lots(self) -> Vec<Lot> {
        self.acf
            .phase_group
            .into_iter()
            .filter(Phase::is_active)
            .flat_map(|phase| phase.group_houses_phase)
            .flat_map(|group| group.houses_group)
            .filter_map(|entry| entry.house)
            .collect()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        // ACF sends `false` for an empty field.
        Value::Null | Value::Bool(_) => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!("expected string or number, got {other}"))),
    }
}

fn lot_or_none<'de, D>(deserializer: D) -> Result<Option<Lot>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    match serde_json::from_value::<Lot>(raw) {
        Ok(lot) if !lot.lot_number.trim().is_empty() => Ok(Some(lot)),
        Ok(_) => Ok(None),
        Err(err) => {
            log::warn!("skipping listing row: {err}");
            Ok(None)
        }
    }
}

/// Empty ACF repeaters come through as `false` or `""` instead of `[]`.
fn seq_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}
