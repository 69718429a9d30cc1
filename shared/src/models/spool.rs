//! Spool Model
//!
//! Shape served by the legacy backend under `/api/spools`.

use super::filament_type::{FilamentType, UNKNOWN};
use crate::error::ModelError;
use crate::weight::calculate_used_weight;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Spoolman-only data kept on a spool read from Spoolman
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpoolProvenance {
    /// Grams consumed as tracked by Spoolman
    pub used_weight: f64,
    /// Weight of the empty spool in grams
    pub spool_weight: Option<f64>,
}

/// Spool entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spool {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub filament_type_id: Option<i64>,
    #[serde(default)]
    pub spool_number: Option<String>,
    /// Initial filament weight in grams
    #[serde(default)]
    pub weight: f64,
    /// Grams left; unset on a partial update means "unchanged"
    #[serde(default)]
    pub remaining_weight: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub purchase_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_empty: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Included filament type.
    ///
    /// Deprecated: some older responses spell the key `FilamentType`; that
    /// casing is accepted on input and never written.
    #[serde(default, alias = "FilamentType", skip_serializing_if = "Option::is_none")]
    pub filament_type: Option<FilamentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<SpoolProvenance>,
}

impl Spool {
    pub fn new(filament_type_id: i64, weight: f64, remaining_weight: f64) -> Self {
        Self {
            id: None,
            filament_type_id: Some(filament_type_id),
            spool_number: None,
            weight,
            remaining_weight: Some(remaining_weight),
            price: None,
            purchase_date: None,
            location: None,
            notes: None,
            is_empty: false,
            created_at: None,
            updated_at: None,
            filament_type: None,
            remote: None,
        }
    }

    pub fn used_weight(&self) -> f64 {
        calculate_used_weight(Some(self.weight), self.remaining_weight)
    }

    /// "Manufacturer Name" of the included filament type, or "Unknown"
    pub fn filament_label(&self) -> String {
        self.filament_type
            .as_ref()
            .map(FilamentType::display_name)
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.weight < 0.0 {
            return Err(ModelError::Negative {
                field: "weight",
                value: self.weight,
            });
        }
        let Some(remaining) = self.remaining_weight else {
            return Ok(());
        };
        if remaining < 0.0 {
            return Err(ModelError::Negative {
                field: "remainingWeight",
                value: remaining,
            });
        }
        if remaining > self.weight {
            return Err(ModelError::RemainingExceedsInitial {
                remaining,
                initial: self.weight,
            });
        }
        Ok(())
    }
}

/// Query filters of `GET /api/spools`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpoolFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filament_type_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_empty: Option<bool>,
}

impl SpoolFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_filament_type(filament_type_id: i64) -> Self {
        Self {
            filament_type_id: Some(filament_type_id),
            is_empty: None,
        }
    }

    pub fn empty(mut self, is_empty: bool) -> Self {
        self.is_empty = Some(is_empty);
        self
    }

    pub fn matches(&self, spool: &Spool) -> bool {
        self.filament_type_id
            .is_none_or(|id| spool.filament_type_id == Some(id))
            && self.is_empty.is_none_or(|empty| spool.is_empty == empty)
    }
}
