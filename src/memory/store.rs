//! Memory store - Create the memory directory and its placeholder files

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::core::error::BootstrapError;
use crate::core::model::FileOutcome;

/// Default content of a freshly created file: an empty JSON array
pub fn default_payload() -> Result<Vec<u8>, BootstrapError> {
    let empty: Vec<serde_json::Value> = Vec::new();
    Ok(serde_json::to_vec(&empty)?)
}

/// Ensure the memory directory exists, creating missing parents
pub fn ensure_memory_dir(dir: &Path) -> Result<(), BootstrapError> {
    fs::create_dir_all(dir).map_err(|source| BootstrapError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Create `path` with `payload` unless something already exists there.
///
/// Existing content is never read or validated.
pub fn init_file(path: &Path, payload: &[u8]) -> Result<FileOutcome, BootstrapError> {
    let write_err = |source| BootstrapError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(FileOutcome::Skipped),
        Err(e) => return Err(write_err(e)),
    };

    file.write_all(payload).map_err(write_err)?;
    file.sync_all().map_err(write_err)?;
    Ok(FileOutcome::Created)
}
