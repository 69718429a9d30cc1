//! Migration statistics

use std::fmt;

/// Kind of record being migrated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    FilamentType,
    Spool,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::FilamentType => write!(f, "filament type"),
            ItemKind::Spool => write!(f, "spool"),
        }
    }
}

/// Counts of one phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseStats {
    pub total: usize,
    pub created: usize,
    pub failed: usize,
}

impl PhaseStats {
    /// Items that went through without error (created, or would be on a dry run)
    pub fn succeeded(&self) -> usize {
        self.total.saturating_sub(self.failed)
    }
}

/// One record that could not be migrated
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub kind: ItemKind,
    /// Id in the legacy backend
    pub local_id: Option<i64>,
    /// Human readable name of the record
    pub label: String,
    pub message: String,
}

/// Outcome of a migration run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MigrationReport {
    pub dry_run: bool,
    pub vendors_created: usize,
    pub filament_types: PhaseStats,
    pub spools: PhaseStats,
    pub failures: Vec<Failure>,
}

impl MigrationReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub(crate) fn record_failure(&mut self, failure: Failure) {
        match failure.kind {
            ItemKind::FilamentType => self.filament_types.failed += 1,
            ItemKind::Spool => self.spools.failed += 1,
        }
        self.failures.push(failure);
    }
}
