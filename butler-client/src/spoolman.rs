//! Client of the Spoolman REST API

use crate::http::HttpClient;
use crate::{ClientConfig, ClientResult};
use shared::spoolman::{
    Filament, FilamentQuery, FilamentWrite, Spool, SpoolQuery, SpoolUse, SpoolWrite, SpoolmanHealth,
    SpoolmanInfo, Vendor, VendorQuery, VendorWrite,
};

/// Path of the API below the Spoolman root URL
pub const API_PREFIX: &str = "/api/v1";

/// Typed access to a Spoolman instance.
///
/// Updates use PATCH: fields left out of a write payload stay unchanged.
#[derive(Debug, Clone)]
pub struct SpoolmanClient {
    http: HttpClient,
}

impl SpoolmanClient {
    /// `config.base_url` is the Spoolman root, e.g. `http://localhost:7912`
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let api = ClientConfig {
            base_url: format!("{}{}", config.base_url.trim_end_matches('/'), API_PREFIX),
            ..config.clone()
        };
        Ok(Self {
            http: HttpClient::new(&api)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ========== Info & Health ==========

    pub async fn info(&self) -> ClientResult<SpoolmanInfo> {
        self.http.get("/info").await
    }

    pub async fn health(&self) -> ClientResult<SpoolmanHealth> {
        self.http.get("/health").await
    }

    // ========== Filaments ==========

    pub async fn list_filaments(&self, query: &FilamentQuery) -> ClientResult<Vec<Filament>> {
        self.http.get_with_query("/filament", query).await
    }

    pub async fn get_filament(&self, id: i64) -> ClientResult<Filament> {
        self.http.get(&format!("/filament/{id}")).await
    }

    pub async fn create_filament(&self, filament: &FilamentWrite) -> ClientResult<Filament> {
        self.http.post("/filament", filament).await
    }

    pub async fn update_filament(&self, id: i64, filament: &FilamentWrite) -> ClientResult<Filament> {
        self.http.patch(&format!("/filament/{id}"), filament).await
    }

    pub async fn delete_filament(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/filament/{id}")).await
    }

    // ========== Spools ==========

    pub async fn list_spools(&self, query: &SpoolQuery) -> ClientResult<Vec<Spool>> {
        self.http.get_with_query("/spool", query).await
    }

    pub async fn get_spool(&self, id: i64) -> ClientResult<Spool> {
        self.http.get(&format!("/spool/{id}")).await
    }

    pub async fn create_spool(&self, spool: &SpoolWrite) -> ClientResult<Spool> {
        self.http.post("/spool", spool).await
    }

    pub async fn update_spool(&self, id: i64, spool: &SpoolWrite) -> ClientResult<Spool> {
        self.http.patch(&format!("/spool/{id}"), spool).await
    }

    pub async fn delete_spool(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/spool/{id}")).await
    }

    /// Record `weight` grams as consumed from a spool
    pub async fn use_spool(&self, id: i64, weight: f64) -> ClientResult<Spool> {
        self.http
            .put(&format!("/spool/{id}/use"), &SpoolUse { use_weight: weight })
            .await
    }

    // ========== Vendors ==========

    pub async fn list_vendors(&self, query: &VendorQuery) -> ClientResult<Vec<Vendor>> {
        self.http.get_with_query("/vendor", query).await
    }

    pub async fn get_vendor(&self, id: i64) -> ClientResult<Vendor> {
        self.http.get(&format!("/vendor/{id}")).await
    }

    pub async fn create_vendor(&self, vendor: &VendorWrite) -> ClientResult<Vendor> {
        self.http.post("/vendor", vendor).await
    }

    pub async fn update_vendor(&self, id: i64, vendor: &VendorWrite) -> ClientResult<Vendor> {
        self.http.patch(&format!("/vendor/{id}"), vendor).await
    }

    pub async fn delete_vendor(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/vendor/{id}")).await
    }
}
