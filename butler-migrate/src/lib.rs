//! Butler Migrate - copy a legacy FilamentButler inventory into Spoolman

pub mod error;
pub mod migrate;
pub mod report;
pub mod source;

pub use error::{MigrationError, MigrationResult};
pub use migrate::{
    IdMap, MIGRATION_COMMENT, MigrationObserver, Migrator, Phase, Preflight, RemoteFilamentId, Silent,
};
pub use report::{Failure, ItemKind, MigrationReport, PhaseStats};
pub use source::{LegacySource, MigrationTarget};
