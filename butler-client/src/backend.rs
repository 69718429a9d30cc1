//! Inventory backends
//!
//! Consumers work with the local shapes ([`FilamentType`], [`Spool`]) and pick
//! the storage by configuration. The legacy backend passes them through; the
//! Spoolman backend translates with [`shared::adapter`].

use crate::vendor::VendorResolver;
use crate::{BackendConfig, BackendKind, ClientResult, LegacyClient, SpoolmanClient};
use async_trait::async_trait;
use shared::ModelError;
use shared::adapter::{filament, spool};
use shared::models::{FilamentType, Spool, SpoolFilter};
use shared::spoolman::{FilamentQuery, SpoolQuery};

/// CRUD over filament types and spools in local shape
#[async_trait]
pub trait InventoryBackend: Send + Sync {
    fn kind(&self) -> BackendKind;

    async fn list_filament_types(&self) -> ClientResult<Vec<FilamentType>>;
    async fn get_filament_type(&self, id: i64) -> ClientResult<FilamentType>;
    async fn create_filament_type(&self, filament_type: &FilamentType) -> ClientResult<FilamentType>;
    async fn update_filament_type(&self, id: i64, filament_type: &FilamentType) -> ClientResult<FilamentType>;
    async fn delete_filament_type(&self, id: i64) -> ClientResult<()>;

    async fn list_spools(&self, filter: &SpoolFilter) -> ClientResult<Vec<Spool>>;
    async fn get_spool(&self, id: i64) -> ClientResult<Spool>;
    async fn create_spool(&self, spool: &Spool) -> ClientResult<Spool>;
    async fn update_spool(&self, id: i64, spool: &Spool) -> ClientResult<Spool>;
    async fn delete_spool(&self, id: i64) -> ClientResult<()>;

    /// Spools as the legacy API returned them, with the included filament type
    /// under both `filamentType` and `FilamentType`
    async fn list_spools_legacy_shape(&self, filter: &SpoolFilter) -> ClientResult<Vec<serde_json::Value>> {
        let spools = self.list_spools(filter).await?;
        #[allow(deprecated)]
        let values = spools.iter().map(spool::to_legacy_value).collect();
        Ok(values)
    }
}

#[async_trait]
impl InventoryBackend for LegacyClient {
    fn kind(&self) -> BackendKind {
        BackendKind::Legacy
    }

    async fn list_filament_types(&self) -> ClientResult<Vec<FilamentType>> {
        LegacyClient::list_filament_types(self).await
    }

    async fn get_filament_type(&self, id: i64) -> ClientResult<FilamentType> {
        LegacyClient::get_filament_type(self, id).await
    }

    async fn create_filament_type(&self, filament_type: &FilamentType) -> ClientResult<FilamentType> {
        filament_type.validate()?;
        LegacyClient::create_filament_type(self, filament_type).await
    }

    async fn update_filament_type(&self, id: i64, filament_type: &FilamentType) -> ClientResult<FilamentType> {
        filament_type.validate()?;
        LegacyClient::update_filament_type(self, id, filament_type).await
    }

    async fn delete_filament_type(&self, id: i64) -> ClientResult<()> {
        LegacyClient::delete_filament_type(self, id).await
    }

    async fn list_spools(&self, filter: &SpoolFilter) -> ClientResult<Vec<Spool>> {
        LegacyClient::list_spools(self, filter).await
    }

    async fn get_spool(&self, id: i64) -> ClientResult<Spool> {
        LegacyClient::get_spool(self, id).await
    }

    async fn create_spool(&self, spool: &Spool) -> ClientResult<Spool> {
        spool.validate()?;
        LegacyClient::create_spool(self, spool).await
    }

    async fn update_spool(&self, id: i64, spool: &Spool) -> ClientResult<Spool> {
        spool.validate()?;
        LegacyClient::update_spool(self, id, spool).await
    }

    async fn delete_spool(&self, id: i64) -> ClientResult<()> {
        LegacyClient::delete_spool(self, id).await
    }
}

/// Spoolman seen through the local model
#[derive(Debug, Clone)]
pub struct SpoolmanBackend {
    client: SpoolmanClient,
}

impl SpoolmanBackend {
    pub fn new(client: SpoolmanClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &SpoolmanClient {
        &self.client
    }

    /// Vendor for the manufacturer name, else the vendor the filament already had
    async fn vendor_for(&self, filament_type: &FilamentType) -> Option<i64> {
        let resolved = VendorResolver::new(&self.client)
            .resolve(&filament_type.manufacturer)
            .await;
        resolved.or_else(|| filament_type.remote.as_ref().and_then(|r| r.vendor_id))
    }
}

#[async_trait]
impl InventoryBackend for SpoolmanBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Spoolman
    }

    async fn list_filament_types(&self) -> ClientResult<Vec<FilamentType>> {
        let filaments = self.client.list_filaments(&FilamentQuery::default()).await?;
        Ok(filament::to_local_all(&filaments))
    }

    async fn get_filament_type(&self, id: i64) -> ClientResult<FilamentType> {
        let remote = self.client.get_filament(id).await?;
        Ok(filament::to_local(&remote))
    }

    async fn create_filament_type(&self, filament_type: &FilamentType) -> ClientResult<FilamentType> {
        filament_type.validate()?;
        let vendor_id = self.vendor_for(filament_type).await;
        let payload = filament::to_remote_with_vendor(filament_type, vendor_id);

        let created = self.client.create_filament(&payload).await?;
        tracing::info!(id = created.id, name = %filament_type.display_name(), "Created filament");
        Ok(filament::to_local(&created))
    }

    async fn update_filament_type(&self, id: i64, filament_type: &FilamentType) -> ClientResult<FilamentType> {
        filament_type.validate()?;
        let vendor_id = self.vendor_for(filament_type).await;
        let payload = filament::to_remote_with_vendor(filament_type, vendor_id);

        let updated = self.client.update_filament(id, &payload).await?;
        Ok(filament::to_local(&updated))
    }

    async fn delete_filament_type(&self, id: i64) -> ClientResult<()> {
        self.client.delete_filament(id).await
    }

    async fn list_spools(&self, filter: &SpoolFilter) -> ClientResult<Vec<Spool>> {
        let query = SpoolQuery {
            filament_id: filter.filament_type_id,
            // Archived spools are the empty ones
            allow_archived: Some(filter.is_empty != Some(false)),
            ..Default::default()
        };
        let remote = self.client.list_spools(&query).await?;

        let mut spools = spool::to_local_all(&remote);
        spools.retain(|s| filter.matches(s));
        Ok(spools)
    }

    async fn get_spool(&self, id: i64) -> ClientResult<Spool> {
        let remote = self.client.get_spool(id).await?;
        Ok(spool::to_local(&remote))
    }

    async fn create_spool(&self, local: &Spool) -> ClientResult<Spool> {
        local.validate()?;
        if local.filament_type_id.is_none() {
            return Err(ModelError::MissingField("filamentTypeId").into());
        }

        let created = self.client.create_spool(&spool::to_remote(local)).await?;
        tracing::info!(id = created.id, "Created spool");
        Ok(spool::to_local(&created))
    }

    async fn update_spool(&self, id: i64, local: &Spool) -> ClientResult<Spool> {
        local.validate()?;
        let updated = self.client.update_spool(id, &spool::to_remote(local)).await?;
        Ok(spool::to_local(&updated))
    }

    async fn delete_spool(&self, id: i64) -> ClientResult<()> {
        self.client.delete_spool(id).await
    }
}

/// Backend selected by `config.kind`
pub fn connect(config: &BackendConfig) -> ClientResult<Box<dyn InventoryBackend>> {
    tracing::debug!(backend = %config.kind, "Connecting inventory backend");
    Ok(match config.kind {
        BackendKind::Legacy => Box::new(LegacyClient::new(&config.legacy_client_config())?),
        BackendKind::Spoolman => Box::new(SpoolmanBackend::new(SpoolmanClient::new(
            &config.spoolman_client_config(),
        )?)),
    })
}
