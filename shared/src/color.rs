//! Filament color handling
//!
//! The local model stores hex colors with a leading `#` in two flat fields
//! (`colorHex`, `colorHex2`). Spoolman stores bare hex either in `color_hex`
//! or, for multi-color filaments, comma-joined in `multi_color_hexes`. Both
//! sides go through [`FilamentColor`] so only one of the remote fields is ever
//! populated.

use crate::patch::Patch;
use serde::{Deserialize, Serialize};

/// Bare fallback hex
pub const DEFAULT_HEX: &str = "000000";

/// Normalized fallback hex
pub const DEFAULT_HEX_NORMALIZED: &str = "#000000";

/// Display name used when a filament has no known color
pub const UNKNOWN_COLOR_NAME: &str = "Unknown";

/// Ensure a hex color carries exactly one leading `#`.
///
/// Empty input yields [`DEFAULT_HEX_NORMALIZED`]. Case is preserved.
pub fn normalize_hex(hex: &str) -> String {
    let bare = hex.trim().trim_start_matches('#');
    if bare.is_empty() {
        return DEFAULT_HEX_NORMALIZED.to_string();
    }
    format!("#{bare}")
}

/// Strip the leading `#` and lowercase, the form Spoolman stores.
///
/// Empty input yields [`DEFAULT_HEX`].
pub fn bare_hex(hex: &str) -> String {
    let bare = hex.trim().trim_start_matches('#');
    if bare.is_empty() {
        return DEFAULT_HEX.to_string();
    }
    bare.to_ascii_lowercase()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// How the colors of a multi-color filament are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiColorDirection {
    /// Colors side by side along the strand
    #[default]
    Coaxial,
    /// Colors alternate along the length
    Longitudinal,
}

/// Color of a filament, hex values normalized with a leading `#`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilamentColor {
    Single(String),
    Dual(String, String),
}

/// The three Spoolman color fields of a write payload
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RemoteColorFields {
    pub color_hex: Patch<String>,
    pub multi_color_hexes: Patch<String>,
    pub multi_color_direction: Patch<MultiColorDirection>,
}

impl FilamentColor {
    pub fn single(hex: &str) -> Self {
        FilamentColor::Single(normalize_hex(hex))
    }

    pub fn dual(primary: &str, secondary: &str) -> Self {
        FilamentColor::Dual(normalize_hex(primary), normalize_hex(secondary))
    }

    /// Parse a comma-separated multi-hex string.
    ///
    /// Only the first two segments are kept; empty segments are skipped.
    pub fn parse_multi(multi_hexes: &str) -> Option<Self> {
        let mut segments = multi_hexes.split(',').map(str::trim).filter(|s| !s.is_empty());
        let primary = segments.next()?;
        let color = match segments.next() {
            Some(secondary) => FilamentColor::dual(primary, secondary),
            None => FilamentColor::single(primary),
        };
        let dropped = segments.count();
        if dropped > 0 {
            tracing::debug!(multi_hexes, dropped, "Only two colors are kept");
        }
        Some(color)
    }

    /// Build from Spoolman's fields; `multi_color_hexes` wins over `color_hex`.
    pub fn from_remote(color_hex: Option<&str>, multi_color_hexes: Option<&str>) -> Option<Self> {
        if let Some(color) = non_empty(multi_color_hexes).and_then(Self::parse_multi) {
            return Some(color);
        }
        non_empty(color_hex).map(FilamentColor::single)
    }

    /// Build from the local flat fields.
    ///
    /// A secondary color without a primary gets the default primary.
    pub fn from_local(color_hex: Option<&str>, color_hex2: Option<&str>) -> Option<Self> {
        match (non_empty(color_hex), non_empty(color_hex2)) {
            (primary, Some(secondary)) => Some(FilamentColor::dual(
                primary.unwrap_or(DEFAULT_HEX),
                secondary,
            )),
            (Some(primary), None) => Some(FilamentColor::single(primary)),
            (None, None) => None,
        }
    }

    pub fn primary(&self) -> &str {
        match self {
            FilamentColor::Single(hex) | FilamentColor::Dual(hex, _) => hex,
        }
    }

    pub fn secondary(&self) -> Option<&str> {
        match self {
            FilamentColor::Single(_) => None,
            FilamentColor::Dual(_, hex) => Some(hex),
        }
    }

    pub fn is_dual(&self) -> bool {
        matches!(self, FilamentColor::Dual(..))
    }

    /// Serialize into the mutually exclusive remote fields
    pub fn to_remote_fields(&self) -> RemoteColorFields {
        match self {
            FilamentColor::Single(hex) => RemoteColorFields {
                color_hex: Patch::Set(bare_hex(hex)),
                multi_color_hexes: Patch::Clear,
                multi_color_direction: Patch::Absent,
            },
            FilamentColor::Dual(primary, secondary) => RemoteColorFields {
                color_hex: Patch::Clear,
                multi_color_hexes: Patch::Set(format!(
                    "{},{}",
                    bare_hex(primary),
                    bare_hex(secondary)
                )),
                multi_color_direction: Patch::Set(MultiColorDirection::Coaxial),
            },
        }
    }
}
