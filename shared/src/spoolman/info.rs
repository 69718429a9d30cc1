//! Spoolman server info and health

use serde::{Deserialize, Serialize};

/// Response of `GET /info`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpoolmanInfo {
    pub version: String,
    #[serde(default)]
    pub debug_mode: bool,
    #[serde(default)]
    pub automatic_backups: bool,
    #[serde(default)]
    pub data_dir: Option<String>,
    #[serde(default)]
    pub logs_dir: Option<String>,
    #[serde(default)]
    pub backups_dir: Option<String>,
    #[serde(default)]
    pub db_type: Option<String>,
    #[serde(default)]
    pub git_commit: Option<String>,
    #[serde(default)]
    pub build_date: Option<String>,
}

/// Response of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpoolmanHealth {
    pub status: String,
}
