//! The two ends of a migration

use async_trait::async_trait;
use butler_client::{ClientResult, LegacyClient, SpoolmanClient, VendorDirectory};
use shared::models::{FilamentType, HealthStatus, Spool, SpoolFilter};
use shared::spoolman::{self, Filament, FilamentWrite, SpoolWrite, SpoolmanInfo};

/// Where records are read from
#[async_trait]
pub trait LegacySource: Send + Sync {
    async fn health(&self) -> ClientResult<HealthStatus>;
    async fn filament_types(&self) -> ClientResult<Vec<FilamentType>>;
    async fn spools(&self) -> ClientResult<Vec<Spool>>;
}

#[async_trait]
impl LegacySource for LegacyClient {
    async fn health(&self) -> ClientResult<HealthStatus> {
        LegacyClient::health(self).await
    }

    async fn filament_types(&self) -> ClientResult<Vec<FilamentType>> {
        self.list_filament_types().await
    }

    async fn spools(&self) -> ClientResult<Vec<Spool>> {
        self.list_spools(&SpoolFilter::all()).await
    }
}

/// Where records are created
#[async_trait]
pub trait MigrationTarget: VendorDirectory {
    async fn info(&self) -> ClientResult<SpoolmanInfo>;
    async fn create_filament(&self, filament: &FilamentWrite) -> ClientResult<Filament>;
    async fn create_spool(&self, spool: &SpoolWrite) -> ClientResult<spoolman::Spool>;
}

#[async_trait]
impl MigrationTarget for SpoolmanClient {
    async fn info(&self) -> ClientResult<SpoolmanInfo> {
        SpoolmanClient::info(self).await
    }

    async fn create_filament(&self, filament: &FilamentWrite) -> ClientResult<Filament> {
        SpoolmanClient::create_filament(self, filament).await
    }

    async fn create_spool(&self, spool: &SpoolWrite) -> ClientResult<spoolman::Spool> {
        SpoolmanClient::create_spool(self, spool).await
    }
}
