//! Butler Client - HTTP clients for the inventory backends
//!
//! Provides typed access to the legacy FilamentButler API and to Spoolman,
//! plus a backend switch that speaks the local model to either.

pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod legacy;
pub mod spoolman;
pub mod vendor;

pub use backend::{InventoryBackend, SpoolmanBackend, connect};
pub use config::{BackendConfig, BackendKind, ClientConfig};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use legacy::LegacyClient;
pub use spoolman::SpoolmanClient;
pub use vendor::{VendorDirectory, VendorResolution, VendorResolver};
