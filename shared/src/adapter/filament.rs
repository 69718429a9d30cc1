//! Filament transform: Spoolman `Filament` ⇄ local `FilamentType`

use crate::color::{DEFAULT_HEX_NORMALIZED, FilamentColor, UNKNOWN_COLOR_NAME};
use crate::models::{DEFAULT_DIAMETER, DEFAULT_MATERIAL, FilamentProvenance, FilamentType, UNKNOWN};
use crate::patch::Patch;
use crate::spoolman::{DEFAULT_DENSITY, Filament, FilamentWrite};

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Spoolman filament → local filament type
///
/// Round-trips every field except the color display names: Spoolman stores
/// no color name, so `color` and `color2` come back as the normalized hex.
pub fn to_local(filament: &Filament) -> FilamentType {
    let color = filament.color();
    let (color_name, color_hex) = match &color {
        Some(c) => (c.primary().to_string(), c.primary().to_string()),
        None => (UNKNOWN_COLOR_NAME.to_string(), DEFAULT_HEX_NORMALIZED.to_string()),
    };
    let secondary = color
        .as_ref()
        .and_then(FilamentColor::secondary)
        .map(str::to_string);

    FilamentType {
        id: Some(filament.id),
        name: non_empty(filament.name.as_deref()).unwrap_or_else(|| UNKNOWN.to_string()),
        manufacturer: filament
            .vendor
            .as_ref()
            .and_then(|v| non_empty(Some(v.name.as_str())))
            .unwrap_or_else(|| UNKNOWN.to_string()),
        material: non_empty(filament.material.as_deref())
            .unwrap_or_else(|| DEFAULT_MATERIAL.to_string()),
        color: color_name,
        color_hex: Some(color_hex),
        color2: secondary.clone(),
        color_hex2: secondary,
        diameter: filament.diameter.unwrap_or(DEFAULT_DIAMETER),
        standard_weight: filament.weight,
        standard_price: filament.price,
        print_temperature: filament.settings_extruder_temp,
        bed_temperature: filament.settings_bed_temp,
        notes: filament.comment.clone(),
        created_at: filament.registered,
        updated_at: filament.registered,
        spool_count: None,
        remote: Some(FilamentProvenance {
            vendor_id: filament.vendor.as_ref().map(|v| v.id),
            density: filament.density.unwrap_or(DEFAULT_DENSITY),
            spool_weight: filament.spool_weight,
        }),
    }
}

/// Local filament type → Spoolman create/update payload.
///
/// Every optional field is sent, as a value or as `null`, except the vendor
/// and colors, which are left untouched when unknown.
pub fn to_remote(filament_type: &FilamentType) -> FilamentWrite {
    let provenance = filament_type.remote.as_ref();
    let diameter = if filament_type.diameter > 0.0 {
        filament_type.diameter
    } else {
        DEFAULT_DIAMETER
    };
    let colors = filament_type
        .filament_color()
        .map(|c| c.to_remote_fields())
        .unwrap_or_default();

    FilamentWrite {
        name: Patch::Set(filament_type.name.clone()),
        vendor_id: Patch::set_or_absent(provenance.and_then(|p| p.vendor_id)),
        material: Patch::Set(
            non_empty(Some(filament_type.material.as_str())).unwrap_or_else(|| DEFAULT_MATERIAL.to_string()),
        ),
        price: Patch::set_or_clear(filament_type.standard_price),
        density: Patch::Set(provenance.map(|p| p.density).unwrap_or(DEFAULT_DENSITY)),
        diameter: Patch::Set(diameter),
        weight: Patch::set_or_clear(filament_type.standard_weight),
        spool_weight: Patch::set_or_clear(provenance.and_then(|p| p.spool_weight)),
        comment: Patch::set_or_clear(non_empty(filament_type.notes.as_deref())),
        settings_extruder_temp: Patch::set_or_clear(filament_type.print_temperature),
        settings_bed_temp: Patch::set_or_clear(filament_type.bed_temperature),
        color_hex: colors.color_hex,
        multi_color_hexes: colors.multi_color_hexes,
        multi_color_direction: colors.multi_color_direction,
    }
}

/// Local filament type → payload with an explicitly resolved vendor
pub fn to_remote_with_vendor(filament_type: &FilamentType, vendor_id: Option<i64>) -> FilamentWrite {
    FilamentWrite {
        vendor_id: Patch::set_or_absent(vendor_id),
        ..to_remote(filament_type)
    }
}

pub fn to_local_all(filaments: &[Filament]) -> Vec<FilamentType> {
    filaments.iter().map(to_local).collect()
}
