//! Three-state value for partial updates
//!
//! Spoolman's PATCH endpoints distinguish a field that is missing from the body
//! (leave unchanged) from a field that is explicitly `null` (clear it).
//! `Option<T>` cannot carry that difference, so write payloads use [`Patch`].
//!
//! Fields of this type must be annotated with
//! `#[serde(default, skip_serializing_if = "Patch::is_absent")]`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field in a write payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Patch<T> {
    /// Not sent; the remote keeps its current value
    #[default]
    Absent,
    /// Sent as `null`; the remote clears the field
    Clear,
    /// Sent with a value
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    pub fn is_clear(&self) -> bool {
        matches!(self, Patch::Clear)
    }

    /// The value, if one is being set
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Patch::Set(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Patch<U> {
        match self {
            Patch::Absent => Patch::Absent,
            Patch::Clear => Patch::Clear,
            Patch::Set(value) => Patch::Set(f(value)),
        }
    }

    /// `Some` sets the value, `None` clears it.
    pub fn set_or_clear(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        }
    }

    /// `Some` sets the value, `None` leaves the field out.
    pub fn set_or_absent(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Set(value),
            None => Patch::Absent,
        }
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Set(value)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Set(value) => value.serialize(serializer),
            // Absent is normally skipped by the field attribute
            Patch::Absent | Patch::Clear => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // A missing field never reaches here (`#[serde(default)]` yields Absent)
        Ok(Patch::set_or_clear(Option::<T>::deserialize(deserializer)?))
    }
}
