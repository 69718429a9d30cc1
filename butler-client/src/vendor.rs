//! Vendor resolution (find-or-create by name)
//!
//! The local model only knows a manufacturer string; Spoolman wants a vendor
//! id. Resolution is idempotent by name and never fails the caller: any remote
//! error degrades to "no vendor".

use crate::ClientResult;
use crate::spoolman::SpoolmanClient;
use async_trait::async_trait;
use shared::models::UNKNOWN;
use shared::spoolman::{Vendor, VendorQuery, VendorWrite};

/// Comment put on vendors created while editing through the adapter
pub const AUTO_CREATED_COMMENT: &str = "Auto-created by FilamentButler";

/// Where vendors live
#[async_trait]
pub trait VendorDirectory: Send + Sync {
    /// Vendors whose name equals `name` exactly
    async fn find_vendors_by_name(&self, name: &str) -> ClientResult<Vec<Vendor>>;

    async fn create_vendor(&self, vendor: &VendorWrite) -> ClientResult<Vendor>;
}

#[async_trait]
impl VendorDirectory for SpoolmanClient {
    async fn find_vendors_by_name(&self, name: &str) -> ClientResult<Vec<Vendor>> {
        let mut vendors = self.list_vendors(&VendorQuery::by_name(name)).await?;
        vendors.retain(|vendor| vendor.name == name);
        Ok(vendors)
    }

    async fn create_vendor(&self, vendor: &VendorWrite) -> ClientResult<Vendor> {
        SpoolmanClient::create_vendor(self, vendor).await
    }
}

/// How a vendor name was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorResolution {
    /// Empty or "Unknown"; nothing was looked up
    Skipped,
    Existing(i64),
    Created(i64),
    /// Dry run: a vendor would have been created
    WouldCreate,
    /// Lookup or creation failed; already logged
    Failed,
}

impl VendorResolution {
    pub fn vendor_id(&self) -> Option<i64> {
        match self {
            VendorResolution::Existing(id) | VendorResolution::Created(id) => Some(*id),
            _ => None,
        }
    }
}

/// Find-or-create vendors in a [`VendorDirectory`]
pub struct VendorResolver<'a, D: ?Sized> {
    directory: &'a D,
    comment: String,
    dry_run: bool,
}

impl<'a, D: VendorDirectory + ?Sized> VendorResolver<'a, D> {
    pub fn new(directory: &'a D) -> Self {
        Self {
            directory,
            comment: AUTO_CREATED_COMMENT.to_string(),
            dry_run: false,
        }
    }

    /// Comment stored on created vendors
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Look up but never create
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Vendor id for `name`, or `None` to proceed without a vendor
    pub async fn resolve(&self, name: &str) -> Option<i64> {
        self.resolve_detailed(name).await.vendor_id()
    }

    pub async fn resolve_detailed(&self, name: &str) -> VendorResolution {
        let name = name.trim();
        if name.is_empty() || name == UNKNOWN {
            return VendorResolution::Skipped;
        }

        let existing = match self.directory.find_vendors_by_name(name).await {
            Ok(vendors) => vendors,
            Err(e) => {
                tracing::warn!(vendor = %name, error = %e, "Vendor lookup failed");
                return VendorResolution::Failed;
            }
        };
        // First match wins
        if let Some(vendor) = existing.first() {
            tracing::debug!(vendor = %name, id = vendor.id, "Vendor already exists");
            return VendorResolution::Existing(vendor.id);
        }

        if self.dry_run {
            tracing::debug!(vendor = %name, "Dry run, vendor not created");
            return VendorResolution::WouldCreate;
        }

        match self
            .directory
            .create_vendor(&VendorWrite::named(name, self.comment.as_str()))
            .await
        {
            Ok(vendor) => {
                tracing::info!(vendor = %name, id = vendor.id, "Created vendor");
                VendorResolution::Created(vendor.id)
            }
            Err(e) => {
                tracing::warn!(vendor = %name, error = %e, "Vendor creation failed");
                VendorResolution::Failed
            }
        }
    }
}
