//! Spoolman adapter
//!
//! Stateless, per-call translation between the local shapes in
//! [`crate::models`] and Spoolman's shapes in [`crate::spoolman`].
//!
//! - `to_local`: Spoolman response → local model
//! - `to_remote`: local model → Spoolman write payload
//!
//! A missing nested object on the remote side (`Option::None`) maps to a
//! missing value on the local side; there is no separate null handling.

pub mod filament;
pub mod spool;
