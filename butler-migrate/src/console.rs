//! Colored console output

use butler_client::VendorResolution;
use butler_migrate::{Failure, MigrationObserver, MigrationReport, Phase, PhaseStats, RemoteFilamentId};
use owo_colors::OwoColorize;
use shared::models::{FilamentType, Spool};

const RULE_WIDTH: usize = 60;

pub fn section(title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{}", rule.bold());
    println!("{}", title.bold());
    println!("{}\n", rule.bold());
}

pub fn success(message: &str) {
    println!("{}", format!("✓ {message}").green());
}

pub fn warning(message: &str) {
    println!("{}", format!("⚠ {message}").yellow());
}

pub fn error(message: &str) {
    println!("{}", format!("✗ {message}").red());
}

pub fn info(message: &str) {
    println!("{}", format!("ℹ {message}").cyan());
}

/// Prints migration progress as it happens
pub struct Console;

impl MigrationObserver for Console {
    fn phase_started(&self, phase: Phase, total: usize) {
        match phase {
            Phase::FilamentTypes => {
                section("Migrating Filament Types");
                info(&format!("Found {total} filament types to migrate"));
            }
            Phase::Spools => {
                section("Migrating Spools");
                info(&format!("Found {total} spools to migrate"));
            }
        }
    }

    fn filament_type_started(&self, filament_type: &FilamentType) {
        println!();
        info(&format!(
            "Migrating: {} - {} ({})",
            filament_type.manufacturer, filament_type.name, filament_type.material
        ));
    }

    fn vendor_resolved(&self, name: &str, resolution: VendorResolution) {
        match resolution {
            VendorResolution::Existing(id) => {
                info(&format!("  → Vendor \"{name}\" already exists (ID: {id})"))
            }
            VendorResolution::Created(id) => {
                success(&format!("  → Created vendor \"{name}\" (ID: {id})"))
            }
            VendorResolution::WouldCreate => {
                info(&format!("  → [DRY RUN] Would create vendor \"{name}\""))
            }
            VendorResolution::Failed => {
                error(&format!("  → Failed to get/create vendor \"{name}\", continuing without vendor"))
            }
            VendorResolution::Skipped => {}
        }
    }

    fn filament_type_migrated(&self, _filament_type: &FilamentType, remote: RemoteFilamentId) {
        match remote {
            RemoteFilamentId::Created(id) => success(&format!("  → Created filament (Spoolman ID: {id})")),
            RemoteFilamentId::DryRun(_) => info(&format!("  → [DRY RUN] Would create filament ({remote})")),
        }
    }

    fn spool_started(&self, spool: &Spool) {
        let remaining = spool
            .remaining_weight
            .map(|w| format!("{w}g"))
            .unwrap_or_else(|| "?".into());
        println!();
        info(&format!(
            "Migrating spool: {} - {remaining} remaining",
            spool.filament_label()
        ));
    }

    fn spool_migrated(&self, _spool: &Spool, remote_id: Option<i64>) {
        match remote_id {
            Some(id) => success(&format!("  → Created spool (Spoolman ID: {id})")),
            None => info("  → [DRY RUN] Would create spool"),
        }
    }

    fn item_failed(&self, failure: &Failure) {
        error(&format!("  → Failed: {}", failure.message));
    }
}

fn phase_summary(title: &str, stats: &PhaseStats, dry_run: bool) {
    println!("\n{title}:");
    info(&format!("  Total:   {}", stats.total));
    if dry_run {
        info(&format!("  Would create: {}", stats.succeeded()));
    } else {
        success(&format!("  Created: {}", stats.created));
    }
    if stats.failed > 0 {
        error(&format!("  Failed:  {}", stats.failed));
    }
}

/// Final table of created and failed counts
pub fn summary(report: &MigrationReport) {
    section("Migration Summary");

    println!("Vendors:");
    success(&format!("  Created: {}", report.vendors_created));

    phase_summary("Filament Types", &report.filament_types, report.dry_run);
    phase_summary("Spools", &report.spools, report.dry_run);

    if report.has_failures() {
        println!("\nFailures:");
        for failure in &report.failures {
            let id = failure
                .local_id
                .map(|id| format!("#{id}"))
                .unwrap_or_else(|| "#?".into());
            error(&format!(
                "  {} {id} ({}): {}",
                failure.kind, failure.label, failure.message
            ));
        }
    }

    println!("\n");
    if report.dry_run {
        info("This was a DRY RUN - no changes were made to Spoolman");
        info("Run without --dry-run to perform the actual migration");
    } else {
        success("Migration completed successfully!");
        info("You can now use FilamentButler with your Spoolman instance");
    }
}
