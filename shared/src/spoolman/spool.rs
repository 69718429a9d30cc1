//! Spoolman spool

use super::filament::Filament;
use crate::patch::Patch;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Spool entity as returned by Spoolman
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spool {
    pub id: i64,
    #[serde(default)]
    pub registered: Option<DateTime<Utc>>,
    #[serde(default)]
    pub first_used: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_used: Option<DateTime<Utc>>,
    #[serde(default)]
    pub filament: Option<Filament>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub remaining_weight: Option<f64>,
    #[serde(default)]
    pub initial_weight: Option<f64>,
    #[serde(default)]
    pub spool_weight: Option<f64>,
    #[serde(default)]
    pub used_weight: Option<f64>,
    #[serde(default)]
    pub remaining_length: Option<f64>,
    #[serde(default)]
    pub used_length: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub lot_nr: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub extra: HashMap<String, String>,
}

/// Create/update spool payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpoolWrite {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub filament_id: Patch<i64>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub price: Patch<f64>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub initial_weight: Patch<f64>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub spool_weight: Patch<f64>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub remaining_weight: Patch<f64>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub first_used: Patch<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub location: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub lot_nr: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub comment: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub archived: Patch<bool>,
}

/// Body of `PUT /spool/{id}/use`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpoolUse {
    /// Grams consumed
    pub use_weight: f64,
}

/// Query filters of `GET /spool`
#[derive(Debug, Clone, Default, Serialize)]
pub struct SpoolQuery {
    #[serde(rename = "filament.id", skip_serializing_if = "Option::is_none")]
    pub filament_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_archived: Option<bool>,
}
