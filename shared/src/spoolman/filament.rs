//! Spoolman filament

use super::vendor::Vendor;
use crate::color::{FilamentColor, MultiColorDirection};
use crate::patch::Patch;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Density assumed when none is known (PLA), g/cm³
pub const DEFAULT_DENSITY: f64 = 1.24;

/// Filament entity as returned by Spoolman
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filament {
    pub id: i64,
    #[serde(default)]
    pub registered: Option<DateTime<Utc>>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub vendor: Option<Vendor>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub density: Option<f64>,
    #[serde(default)]
    pub diameter: Option<f64>,
    /// Net filament weight of a full spool, grams
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub spool_weight: Option<f64>,
    #[serde(default)]
    pub article_number: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub settings_extruder_temp: Option<i32>,
    #[serde(default)]
    pub settings_bed_temp: Option<i32>,
    #[serde(default)]
    pub color_hex: Option<String>,
    #[serde(default)]
    pub multi_color_hexes: Option<String>,
    #[serde(default)]
    pub multi_color_direction: Option<MultiColorDirection>,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub extra: HashMap<String, String>,
}

impl Filament {
    pub fn color(&self) -> Option<FilamentColor> {
        FilamentColor::from_remote(self.color_hex.as_deref(), self.multi_color_hexes.as_deref())
    }
}

/// Create/update filament payload
///
/// For `POST /filament`, `density` and `diameter` must be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilamentWrite {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub vendor_id: Patch<i64>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub material: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub price: Patch<f64>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub density: Patch<f64>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub diameter: Patch<f64>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub weight: Patch<f64>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub spool_weight: Patch<f64>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub comment: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub settings_extruder_temp: Patch<i32>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub settings_bed_temp: Patch<i32>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub color_hex: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub multi_color_hexes: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub multi_color_direction: Patch<MultiColorDirection>,
}

/// Query filters of `GET /filament`
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilamentQuery {
    #[serde(rename = "vendor.name", skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
