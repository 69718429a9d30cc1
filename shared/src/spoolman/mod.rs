//! Spoolman API types (`/api/v1`)
//!
//! Read types mirror Spoolman's responses; `*Write` types are request bodies
//! built from [`Patch`](crate::patch::Patch) fields so that PATCH requests
//! only touch what they mean to.

pub mod filament;
pub mod info;
pub mod spool;
pub mod vendor;

pub use filament::{DEFAULT_DENSITY, Filament, FilamentQuery, FilamentWrite};
pub use info::{SpoolmanHealth, SpoolmanInfo};
pub use spool::{Spool, SpoolQuery, SpoolUse, SpoolWrite};
pub use vendor::{Vendor, VendorQuery, VendorWrite};
