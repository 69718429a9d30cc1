//! Spool transform: Spoolman `Spool` ⇄ local `Spool`

use super::filament;
use crate::models::{Spool, SpoolProvenance};
use crate::patch::Patch;
use crate::spoolman;
use crate::weight::{calculate_remaining_weight, calculate_used_weight};

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Spoolman spool → local spool, with the nested filament type hydrated
pub fn to_local(spool: &spoolman::Spool) -> Spool {
    // Older Spoolman builds omit remaining_weight when only used_weight is tracked
    let remaining_weight = spool.remaining_weight.unwrap_or_else(|| {
        calculate_remaining_weight(spool.initial_weight, spool.used_weight)
    });
    let used_weight = spool
        .used_weight
        .unwrap_or_else(|| calculate_used_weight(spool.initial_weight, Some(remaining_weight)));

    Spool {
        id: Some(spool.id),
        filament_type_id: spool.filament.as_ref().map(|f| f.id),
        spool_number: spool.lot_nr.clone(),
        weight: spool.initial_weight.unwrap_or(0.0),
        remaining_weight: Some(remaining_weight),
        price: spool.price,
        purchase_date: spool.first_used,
        location: spool.location.clone(),
        notes: spool.comment.clone(),
        is_empty: spool.archived,
        created_at: spool.registered,
        updated_at: spool.last_used.or(spool.registered),
        filament_type: spool.filament.as_ref().map(filament::to_local),
        remote: Some(SpoolProvenance {
            used_weight,
            spool_weight: spool.spool_weight,
        }),
    }
}

/// Local spool → Spoolman create/update payload.
///
/// `remaining_weight` and `first_used` are only sent when known, so an update
/// without them leaves Spoolman's values alone.
pub fn to_remote(spool: &Spool) -> spoolman::SpoolWrite {
    spoolman::SpoolWrite {
        filament_id: Patch::set_or_absent(spool.filament_type_id),
        price: Patch::set_or_clear(spool.price),
        initial_weight: Patch::set_or_clear(Some(spool.weight).filter(|w| *w > 0.0)),
        spool_weight: Patch::set_or_absent(spool.remote.as_ref().and_then(|r| r.spool_weight)),
        remaining_weight: Patch::set_or_absent(spool.remaining_weight),
        first_used: Patch::set_or_absent(spool.purchase_date),
        location: Patch::set_or_clear(non_empty(spool.location.as_deref())),
        lot_nr: Patch::set_or_clear(non_empty(spool.spool_number.as_deref())),
        comment: Patch::set_or_clear(non_empty(spool.notes.as_deref())),
        archived: Patch::Set(spool.is_empty),
    }
}

pub fn to_local_all(spools: &[spoolman::Spool]) -> Vec<Spool> {
    spools.iter().map(to_local).collect()
}

/// JSON of a local spool with the included filament type under both
/// `filamentType` and `FilamentType`, for consumers still reading the latter.
#[deprecated(note = "read `filamentType`; the `FilamentType` duplicate will be removed")]
pub fn to_legacy_value(spool: &Spool) -> serde_json::Value {
    let mut value = serde_json::to_value(spool).unwrap_or(serde_json::Value::Null);
    if let Some(object) = value.as_object_mut() {
        if let Some(filament_type) = object.get("filamentType").cloned() {
            object.insert("FilamentType".to_string(), filament_type);
        }
    }
    value
}
