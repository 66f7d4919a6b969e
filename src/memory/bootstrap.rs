//! Bootstrap run - ensure directory, initialize each file, report completion

use std::io::Write;

use tracing::{debug, info};

use crate::core::config::BootstrapConfig;
use crate::core::error::BootstrapError;
use crate::core::model::{BootstrapReport, FileOutcome, FileReport};
use crate::core::paths::MANAGED_FILES;
use crate::core::render::Renderer;
use crate::memory::store::{default_payload, ensure_memory_dir, init_file};

/// Run the full bootstrap, writing progress lines to `out`.
///
/// Each file's line is written as soon as that file is handled, so a later
/// failure still leaves earlier lines on the sink. The completion line is only
/// written when every step succeeded.
pub fn run_bootstrap<W: Write>(
    config: &BootstrapConfig,
    out: W,
) -> Result<BootstrapReport, BootstrapError> {
    let memory_dir = config.memory_dir();
    debug!(
        home = %config.home().display(),
        memory_dir = %memory_dir.display(),
        "bootstrapping memory directory"
    );

    ensure_memory_dir(&memory_dir)?;

    let payload = default_payload()?;
    let mut renderer = Renderer::new(out);
    let mut report = BootstrapReport::new(&memory_dir);

    for file in &MANAGED_FILES {
        let path = config.file_path(file);
        let outcome = init_file(&path, &payload)?;
        match outcome {
            FileOutcome::Created => info!(file = file.label, "created"),
            FileOutcome::Skipped => debug!(file = file.label, "exists, skipped"),
        }

        let file_report = FileReport::new(path, outcome);
        renderer.file(&file_report)?;
        report.push(file_report);
    }

    renderer.complete(&memory_dir)?;
    debug!(
        created = report.created(),
        skipped = report.skipped(),
        "bootstrap complete"
    );

    Ok(report)
}

/// Run the bootstrap against stdout
pub fn run(config: &BootstrapConfig) -> Result<BootstrapReport, BootstrapError> {
    let stdout = std::io::stdout();
    run_bootstrap(config, stdout.lock())
}
