//! Legacy backend → Spoolman migration
//!
//! Two sequential phases. Filament types go first and fill an id map; spools
//! follow and look their filament up in that map. A failing item is recorded
//! in the report and the batch moves on; nothing is rolled back.

use crate::error::{MigrationError, MigrationResult};
use crate::report::{Failure, ItemKind, MigrationReport};
use crate::source::{LegacySource, MigrationTarget};
use butler_client::{VendorResolution, VendorResolver};
use shared::Patch;
use shared::adapter::{filament, spool};
use shared::models::{FilamentType, Spool};
use shared::spoolman::SpoolWrite;
use std::collections::HashMap;
use std::fmt;

/// Comment stored on vendors created by a migration
pub const MIGRATION_COMMENT: &str = "Migrated from FilamentButler";

/// Spoolman filament a legacy filament type was migrated to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteFilamentId {
    Created(i64),
    /// Dry run placeholder, holds the legacy id
    DryRun(i64),
}

impl RemoteFilamentId {
    pub fn created(&self) -> Option<i64> {
        match self {
            RemoteFilamentId::Created(id) => Some(*id),
            RemoteFilamentId::DryRun(_) => None,
        }
    }
}

impl fmt::Display for RemoteFilamentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteFilamentId::Created(id) => write!(f, "{id}"),
            RemoteFilamentId::DryRun(local_id) => write!(f, "DRY_RUN_{local_id}"),
        }
    }
}

/// Legacy filament type id → Spoolman filament
pub type IdMap = HashMap<i64, RemoteFilamentId>;

/// Migration phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    FilamentTypes,
    Spools,
}

/// Result of the connectivity check
#[derive(Debug, Clone, PartialEq)]
pub struct Preflight {
    pub legacy_status: String,
    pub spoolman_version: String,
}

/// Progress callbacks; every method defaults to doing nothing
pub trait MigrationObserver: Send + Sync {
    fn phase_started(&self, _phase: Phase, _total: usize) {}
    fn filament_type_started(&self, _filament_type: &FilamentType) {}
    fn vendor_resolved(&self, _name: &str, _resolution: VendorResolution) {}
    fn filament_type_migrated(&self, _filament_type: &FilamentType, _remote: RemoteFilamentId) {}
    fn spool_started(&self, _spool: &Spool) {}
    /// `remote_id` is `None` on a dry run
    fn spool_migrated(&self, _spool: &Spool, _remote_id: Option<i64>) {}
    fn item_failed(&self, _failure: &Failure) {}
}

/// Observer that ignores everything
pub struct Silent;

impl MigrationObserver for Silent {}

pub struct Migrator<'a, S: ?Sized, T: ?Sized> {
    legacy: &'a S,
    target: &'a T,
    dry_run: bool,
    observer: &'a dyn MigrationObserver,
}

impl<'a, S, T> Migrator<'a, S, T>
where
    S: LegacySource + ?Sized,
    T: MigrationTarget + ?Sized,
{
    pub fn new(legacy: &'a S, target: &'a T) -> Self {
        Self {
            legacy,
            target,
            dry_run: false,
            observer: &Silent,
        }
    }

    /// Read and transform everything but create nothing
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_observer(mut self, observer: &'a dyn MigrationObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Check both services before anything is written
    pub async fn preflight(&self) -> MigrationResult<Preflight> {
        let health = self
            .legacy
            .health()
            .await
            .map_err(|source| MigrationError::Preflight {
                service: "Legacy backend",
                source,
            })?;
        let info = self
            .target
            .info()
            .await
            .map_err(|source| MigrationError::Preflight {
                service: "Spoolman",
                source,
            })?;

        tracing::info!(legacy = %health.status, spoolman = %info.version, "Preflight passed");
        Ok(Preflight {
            legacy_status: health.status,
            spoolman_version: info.version,
        })
    }

    /// Both phases in order
    pub async fn run(&self) -> MigrationResult<MigrationReport> {
        let mut report = MigrationReport::new(self.dry_run);
        let id_map = self.migrate_filament_types(&mut report).await?;
        self.migrate_spools(&id_map, &mut report).await?;

        tracing::info!(
            dry_run = self.dry_run,
            vendors = report.vendors_created,
            filament_types = report.filament_types.created,
            spools = report.spools.created,
            failures = report.failures.len(),
            "Migration finished"
        );
        Ok(report)
    }

    /// Filament phase. Only a failure to list the filament types is fatal.
    pub async fn migrate_filament_types(&self, report: &mut MigrationReport) -> MigrationResult<IdMap> {
        let filament_types = self.legacy.filament_types().await?;
        report.filament_types.total = filament_types.len();
        self.observer.phase_started(Phase::FilamentTypes, filament_types.len());

        let mut id_map = IdMap::new();
        for filament_type in &filament_types {
            self.observer.filament_type_started(filament_type);

            match self.migrate_filament_type(filament_type, report).await {
                Ok(remote) => {
                    match filament_type.id {
                        Some(local_id) => {
                            id_map.insert(local_id, remote);
                        }
                        None => tracing::warn!(
                            name = %filament_type.display_name(),
                            "Filament type without id, its spools cannot be mapped"
                        ),
                    }
                    self.observer.filament_type_migrated(filament_type, remote);
                }
                Err(e) => {
                    tracing::warn!(id = ?filament_type.id, error = %e, "Filament type migration failed");
                    let failure = Failure {
                        kind: ItemKind::FilamentType,
                        local_id: filament_type.id,
                        label: filament_type.display_name(),
                        message: e.to_string(),
                    };
                    self.observer.item_failed(&failure);
                    report.record_failure(failure);
                }
            }
        }

        Ok(id_map)
    }

    async fn migrate_filament_type(
        &self,
        filament_type: &FilamentType,
        report: &mut MigrationReport,
    ) -> MigrationResult<RemoteFilamentId> {
        let resolution = VendorResolver::new(self.target)
            .with_comment(MIGRATION_COMMENT)
            .dry_run(self.dry_run)
            .resolve_detailed(&filament_type.manufacturer)
            .await;
        if matches!(resolution, VendorResolution::Created(_)) {
            report.vendors_created += 1;
        }
        self.observer.vendor_resolved(&filament_type.manufacturer, resolution);

        let payload = filament::to_remote_with_vendor(filament_type, resolution.vendor_id());
        if self.dry_run {
            return Ok(RemoteFilamentId::DryRun(filament_type.id.unwrap_or_default()));
        }

        let created = self.target.create_filament(&payload).await?;
        report.filament_types.created += 1;
        tracing::info!(local_id = ?filament_type.id, remote_id = created.id, "Created filament");
        Ok(RemoteFilamentId::Created(created.id))
    }

    /// Spool phase. Only a failure to list the spools is fatal.
    pub async fn migrate_spools(&self, id_map: &IdMap, report: &mut MigrationReport) -> MigrationResult<()> {
        let spools = self.legacy.spools().await?;
        report.spools.total = spools.len();
        self.observer.phase_started(Phase::Spools, spools.len());

        for local in &spools {
            self.observer.spool_started(local);

            match self.migrate_spool(local, id_map, report).await {
                Ok(remote_id) => self.observer.spool_migrated(local, remote_id),
                Err(e) => {
                    tracing::warn!(id = ?local.id, error = %e, "Spool migration failed");
                    let failure = Failure {
                        kind: ItemKind::Spool,
                        local_id: local.id,
                        label: local.filament_label(),
                        message: e.to_string(),
                    };
                    self.observer.item_failed(&failure);
                    report.record_failure(failure);
                }
            }
        }

        Ok(())
    }

    async fn migrate_spool(
        &self,
        local: &Spool,
        id_map: &IdMap,
        report: &mut MigrationReport,
    ) -> MigrationResult<Option<i64>> {
        let filament_type_id = local
            .filament_type_id
            .ok_or(MigrationError::MissingFilamentType)?;
        let remote = id_map
            .get(&filament_type_id)
            .copied()
            .ok_or(MigrationError::MissingFilamentMapping { filament_type_id })?;

        if local.remaining_weight.is_some_and(|r| r > local.weight) {
            // Historical data is copied as-is
            tracing::warn!(
                id = ?local.id,
                remaining = ?local.remaining_weight,
                weight = local.weight,
                "Spool has more remaining than initial weight"
            );
        }

        let payload = spool_payload(local, remote);
        if self.dry_run {
            return Ok(None);
        }

        let created = self.target.create_spool(&payload).await?;
        report.spools.created += 1;
        tracing::info!(local_id = ?local.id, remote_id = created.id, "Created spool");
        Ok(Some(created.id))
    }
}

/// Spool payload pointing at the migrated filament
pub fn spool_payload(local: &Spool, remote: RemoteFilamentId) -> SpoolWrite {
    SpoolWrite {
        filament_id: Patch::set_or_absent(remote.created()),
        ..spool::to_remote(local)
    }
}
