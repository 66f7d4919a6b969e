//! CLI module - Command-line interface definition and entry point

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::config::BootstrapConfig;

/// forge-bootstrap - create the Forge memory directory and its placeholder files.
#[derive(Parser, Debug)]
#[command(name = "forge-bootstrap")]
#[command(
    version,
    about,
    long_about = r#"forge-bootstrap prepares the local Forge memory directory.

It takes no arguments. On every run it:
- creates ~/.forge_memory/ (and any missing parents)
- creates project-cache.json and vector-db.json containing [] if they are absent
- leaves existing files untouched, whatever they contain

Running it again is always safe.

Diagnostics are written to stderr and controlled by RUST_LOG (default: warn).
"#
)]
pub struct Cli {}

/// Install the stderr diagnostics subscriber.
///
/// Stdout is reserved for progress lines, so the fmt layer writes to stderr.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI with parsed arguments
pub fn run(_cli: Cli) -> Result<()> {
    let config = BootstrapConfig::from_env().context("Failed to resolve memory directory")?;
    crate::memory::bootstrap::run(&config).context("Bootstrap aborted")?;
    Ok(())
}
