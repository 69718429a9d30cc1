//! Shared types for FilamentButler
//!
//! Local models served by the legacy backend, Spoolman API types, and the
//! stateless adapter translating between the two.

pub mod adapter;
pub mod color;
pub mod error;
pub mod inventory;
pub mod models;
pub mod patch;
pub mod spoolman;
pub mod weight;

// Re-exports
pub use color::{FilamentColor, MultiColorDirection};
pub use error::ModelError;
pub use models::{FilamentType, Spool, SpoolFilter};
pub use patch::Patch;
pub use weight::{calculate_remaining_weight, calculate_used_weight};
