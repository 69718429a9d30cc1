//! Filament Type Model
//!
//! Shape served by the legacy backend under `/api/filament-types`.

use crate::color::FilamentColor;
use crate::error::ModelError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_DIAMETER: f64 = 1.75;
pub const DEFAULT_MATERIAL: &str = "PLA";
/// Manufacturer/name placeholder; never resolved to a vendor
pub const UNKNOWN: &str = "Unknown";

fn default_material() -> String {
    DEFAULT_MATERIAL.to_string()
}

fn default_diameter() -> f64 {
    DEFAULT_DIAMETER
}

/// Postgres COUNT() comes back as a string through the legacy backend.
fn deserialize_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(i64),
        Text(String),
    }

    match Option::<Count>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Count::Number(n)) => Ok(Some(n)),
        Some(Count::Text(s)) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Spoolman-only data kept on a filament type read from Spoolman
///
/// Written back on update so a local edit does not wipe remote fields the
/// local model has no place for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilamentProvenance {
    pub vendor_id: Option<i64>,
    /// g/cm³
    pub density: f64,
    pub spool_weight: Option<f64>,
}

/// Filament type entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilamentType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub manufacturer: String,
    #[serde(default = "default_material")]
    pub material: String,
    /// Display name of the primary color
    pub color: String,
    #[serde(default)]
    pub color_hex: Option<String>,
    #[serde(default)]
    pub color2: Option<String>,
    #[serde(default)]
    pub color_hex2: Option<String>,
    /// mm
    #[serde(default = "default_diameter")]
    pub diameter: f64,
    /// Grams of filament on a standard spool
    #[serde(default)]
    pub standard_weight: Option<f64>,
    #[serde(default)]
    pub standard_price: Option<f64>,
    /// °C
    #[serde(default)]
    pub print_temperature: Option<i32>,
    /// °C
    #[serde(default)]
    pub bed_temperature: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Only present on list responses
    #[serde(
        default,
        deserialize_with = "deserialize_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub spool_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<FilamentProvenance>,
}

impl FilamentType {
    /// New single-color filament type with defaults for everything optional
    pub fn new(
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        material: impl Into<String>,
        color: impl Into<String>,
        color_hex: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            manufacturer: manufacturer.into(),
            material: material.into(),
            color: color.into(),
            color_hex: Some(color_hex.into()),
            color2: None,
            color_hex2: None,
            diameter: DEFAULT_DIAMETER,
            standard_weight: None,
            standard_price: None,
            print_temperature: None,
            bed_temperature: None,
            notes: None,
            created_at: None,
            updated_at: None,
            spool_count: None,
            remote: None,
        }
    }

    /// Add a secondary color
    pub fn with_secondary_color(mut self, color: impl Into<String>, hex: impl Into<String>) -> Self {
        self.color2 = Some(color.into());
        self.color_hex2 = Some(hex.into());
        self
    }

    pub fn filament_color(&self) -> Option<FilamentColor> {
        FilamentColor::from_local(self.color_hex.as_deref(), self.color_hex2.as_deref())
    }

    /// "Manufacturer Name"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.manufacturer, self.name)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::MissingField("name"));
        }
        if self.manufacturer.trim().is_empty() {
            return Err(ModelError::MissingField("manufacturer"));
        }
        let has_primary = self.color_hex.as_deref().is_some_and(|h| !h.trim().is_empty());
        let has_secondary = self.color_hex2.as_deref().is_some_and(|h| !h.trim().is_empty())
            || self.color2.as_deref().is_some_and(|c| !c.trim().is_empty());
        if has_secondary && !has_primary {
            return Err(ModelError::SecondaryWithoutPrimary);
        }
        if self.diameter < 0.0 {
            return Err(ModelError::Negative {
                field: "diameter",
                value: self.diameter,
            });
        }
        Ok(())
    }
}
