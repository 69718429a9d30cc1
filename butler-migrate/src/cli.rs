//! Command line arguments

use butler_client::ClientConfig;
use butler_client::config::{DEFAULT_LEGACY_URL, DEFAULT_SPOOLMAN_URL, DEFAULT_TIMEOUT_SECS};
use clap::Parser;

const EXAMPLES: &str = "\
Examples:
  # Dry run to test the migration
  butler-migrate --dry-run

  # Migrate with custom URLs
  butler-migrate --legacy-url http://localhost:3000 --spoolman-url https://my-spoolman.com

  # Migrate without confirmation prompts
  butler-migrate --yes

Prerequisites:
  - The legacy backend must be running (docker-compose --profile legacy up)
  - The Spoolman instance must be reachable";

/// FilamentButler → Spoolman migration tool
#[derive(Debug, Parser)]
#[command(name = "butler-migrate", version, after_help = EXAMPLES)]
pub struct Args {
    /// URL of the legacy FilamentButler backend
    #[arg(long, env = "LEGACY_URL", default_value = DEFAULT_LEGACY_URL)]
    pub legacy_url: String,

    /// URL of your Spoolman instance
    #[arg(long, env = "SPOOLMAN_URL", default_value = DEFAULT_SPOOLMAN_URL)]
    pub spoolman_url: String,

    /// Run the migration without making any changes
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// HTTP request timeout in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

impl Args {
    pub fn legacy_config(&self) -> ClientConfig {
        ClientConfig::new(&self.legacy_url).with_timeout(self.timeout)
    }

    pub fn spoolman_config(&self) -> ClientConfig {
        ClientConfig::new(&self.spoolman_url).with_timeout(self.timeout)
    }

    /// Ask before writing unless `--yes` or a dry run
    pub fn needs_confirmation(&self) -> bool {
        !self.yes && !self.dry_run
    }
}
