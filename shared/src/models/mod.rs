//! Data models of the legacy backend
//!
//! These are the "local" shapes every consumer works with, whichever backend
//! actually stores the data.

pub mod filament_type;
pub mod health;
pub mod spool;

// Re-exports
pub use filament_type::*;
pub use health::*;
pub use spool::*;
