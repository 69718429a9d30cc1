//! Spoolman vendor

use crate::patch::Patch;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Vendor entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: i64,
    #[serde(default)]
    pub registered: Option<DateTime<Utc>>,
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub empty_spool_weight: Option<f64>,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub extra: HashMap<String, String>,
}

/// Create/update vendor payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorWrite {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub comment: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub empty_spool_weight: Patch<f64>,
}

impl VendorWrite {
    pub fn named(name: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            name: Patch::Set(name.into()),
            comment: Patch::Set(comment.into()),
            empty_spool_weight: Patch::Absent,
        }
    }
}

/// Query filters of `GET /vendor`
#[derive(Debug, Clone, Default, Serialize)]
pub struct VendorQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl VendorQuery {
    /// Server-side filter for a lookup of `name`.
    ///
    /// Spoolman splits `name` on commas and matches each term partially and
    /// case-insensitively, or exactly when the term is quoted. A name holding
    /// a comma or a quote cannot be expressed as one quoted term, so its
    /// longest plain segment is sent unquoted instead. Results may be wider
    /// than `name`; compare with [`Vendor::name`] afterwards.
    pub fn by_name(name: &str) -> Self {
        if !name.contains([',', '"']) {
            return Self {
                name: Some(format!("\"{name}\"")),
            };
        }
        let term = name
            .split([',', '"'])
            .map(str::trim)
            .max_by_key(|segment| segment.len())
            .unwrap_or_default();
        Self {
            name: Some(term.to_string()),
        }
    }
}
