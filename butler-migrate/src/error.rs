//! Migration errors

use butler_client::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrationError {
    /// A remote call failed
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The spool's filament type was not migrated
    #[error("No filament mapping found for filamentTypeId {filament_type_id}")]
    MissingFilamentMapping { filament_type_id: i64 },

    #[error("Spool has no filamentTypeId")]
    MissingFilamentType,

    /// Connectivity check failed before anything was written
    #[error("{service} is not reachable: {source}")]
    Preflight {
        service: &'static str,
        #[source]
        source: ClientError,
    },
}

pub type MigrationResult<T> = Result<T, MigrationError>;
