//! butler-migrate: FilamentButler → Spoolman migration tool
//!
//! Copies every filament type and spool of the legacy backend into Spoolman,
//! creating vendors on the way. Run with `--dry-run` first.

mod cli;
mod console;

use anyhow::Context;
use butler_client::{LegacyClient, SpoolmanClient};
use butler_migrate::Migrator;
use clap::Parser;
use cli::Args;
use console::Console;
use dialoguer::Confirm;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Logs go to stderr, progress to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "butler_migrate=warn,butler_client=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("\n");
            console::error("Migration failed with error:");
            eprintln!("{e:?}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> anyhow::Result<()> {
    console::section("FilamentButler → Spoolman Migration Tool");
    console::info(&format!("Legacy Backend: {}", args.legacy_url));
    console::info(&format!("Spoolman URL:   {}", args.spoolman_url));
    console::info(&format!(
        "Mode:           {}",
        if args.dry_run {
            "DRY RUN (no changes will be made)"
        } else {
            "LIVE MIGRATION"
        }
    ));

    let legacy = LegacyClient::new(&args.legacy_config()).context("Invalid legacy backend URL")?;
    let spoolman = SpoolmanClient::new(&args.spoolman_config()).context("Invalid Spoolman URL")?;
    let observer = Console;
    let migrator = Migrator::new(&legacy, &spoolman)
        .dry_run(args.dry_run)
        .with_observer(&observer);

    console::section("Testing Connections");
    console::info("Testing legacy backend and Spoolman connections...");
    let preflight = migrator.preflight().await?;
    console::success("Legacy backend is reachable");
    console::success(&format!(
        "Spoolman is reachable (version {})",
        preflight.spoolman_version
    ));

    if args.needs_confirmation() {
        println!();
        console::warning("WARNING: This will create new data in your Spoolman instance!");
        console::warning("Make sure you have a backup of your Spoolman database!");
        println!();

        let proceed = Confirm::new()
            .with_prompt("Do you want to proceed with the migration?")
            .default(false)
            .interact()
            .context("Confirmation needs a terminal, pass --yes to skip it")?;
        if !proceed {
            console::info("Migration cancelled by user");
            return Ok(());
        }
    }

    let report = migrator.run().await?;
    console::summary(&report);
    Ok(())
}
