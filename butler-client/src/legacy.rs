//! Client of the legacy FilamentButler REST API

use crate::http::HttpClient;
use crate::{ClientConfig, ClientResult};
use shared::models::{FilamentType, HealthStatus, Spool, SpoolFilter};

/// Typed access to `/api/filament-types`, `/api/spools` and `/api/health`
#[derive(Debug, Clone)]
pub struct LegacyClient {
    http: HttpClient,
}

impl LegacyClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub async fn health(&self) -> ClientResult<HealthStatus> {
        self.http.get("/api/health").await
    }

    // ========== Filament Types ==========

    /// All filament types, newest first, with `spoolCount`
    pub async fn list_filament_types(&self) -> ClientResult<Vec<FilamentType>> {
        self.http.get("/api/filament-types").await
    }

    pub async fn get_filament_type(&self, id: i64) -> ClientResult<FilamentType> {
        self.http.get(&format!("/api/filament-types/{id}")).await
    }

    pub async fn create_filament_type(&self, filament_type: &FilamentType) -> ClientResult<FilamentType> {
        self.http.post("/api/filament-types", filament_type).await
    }

    pub async fn update_filament_type(
        &self,
        id: i64,
        filament_type: &FilamentType,
    ) -> ClientResult<FilamentType> {
        self.http
            .put(&format!("/api/filament-types/{id}"), filament_type)
            .await
    }

    /// Deletes the type and, by cascade, its spools
    pub async fn delete_filament_type(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/api/filament-types/{id}")).await
    }

    // ========== Spools ==========

    /// Spools with their filament type included, newest first
    pub async fn list_spools(&self, filter: &SpoolFilter) -> ClientResult<Vec<Spool>> {
        self.http.get_with_query("/api/spools", filter).await
    }

    pub async fn get_spool(&self, id: i64) -> ClientResult<Spool> {
        self.http.get(&format!("/api/spools/{id}")).await
    }

    pub async fn create_spool(&self, spool: &Spool) -> ClientResult<Spool> {
        self.http.post("/api/spools", spool).await
    }

    pub async fn update_spool(&self, id: i64, spool: &Spool) -> ClientResult<Spool> {
        self.http.put(&format!("/api/spools/{id}"), spool).await
    }

    pub async fn delete_spool(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/api/spools/{id}")).await
    }
}
