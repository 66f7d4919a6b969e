//! forge-bootstrap - Prepare the Forge local memory directory
//!
//! forge-bootstrap:
//! - Ensures `~/.forge_memory/` exists (recursively)
//! - Creates `project-cache.json` and `vector-db.json` holding `[]` when absent
//! - Never overwrites a file that already exists
//! - Reports every step on stdout

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod memory;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_tracing();
    cli::run(cli)
}
