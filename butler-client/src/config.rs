//! Client configuration

use crate::{ClientError, ClientResult};
use std::str::FromStr;

pub const DEFAULT_LEGACY_URL: &str = "http://localhost:3000";
pub const DEFAULT_SPOOLMAN_URL: &str = "http://localhost:7912";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for one HTTP API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

/// Which service stores the inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// The bespoke PostgreSQL-backed REST API
    #[default]
    Legacy,
    Spoolman,
}

impl FromStr for BackendKind {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" | "local" => Ok(BackendKind::Legacy),
            "spoolman" => Ok(BackendKind::Spoolman),
            other => Err(ClientError::Config(format!(
                "unknown backend '{other}' (expected 'legacy' or 'spoolman')"
            ))),
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Legacy => write!(f, "legacy"),
            BackendKind::Spoolman => write!(f, "spoolman"),
        }
    }
}

/// Backend selection for [`crate::backend::connect`]
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub kind: BackendKind,
    pub legacy_url: String,
    /// Spoolman root URL, without `/api/v1`
    pub spoolman_url: String,
    pub timeout: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: BackendKind::default(),
            legacy_url: DEFAULT_LEGACY_URL.to_string(),
            spoolman_url: DEFAULT_SPOOLMAN_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl BackendConfig {
    /// Load from `FILAMENT_BACKEND`, `LEGACY_URL`, `SPOOLMAN_URL` and
    /// `HTTP_TIMEOUT_SECS`
    pub fn from_env() -> ClientResult<Self> {
        let kind = match std::env::var("FILAMENT_BACKEND") {
            Ok(value) if !value.trim().is_empty() => value.parse()?,
            _ => BackendKind::default(),
        };

        Ok(Self {
            kind,
            legacy_url: std::env::var("LEGACY_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_LEGACY_URL.into()),
            spoolman_url: std::env::var("SPOOLMAN_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_SPOOLMAN_URL.into()),
            timeout: std::env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn legacy_client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.legacy_url).with_timeout(self.timeout)
    }

    pub fn spoolman_client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.spoolman_url).with_timeout(self.timeout)
    }
}
