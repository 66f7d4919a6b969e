//! Bootstrap errors
//!
//! Every variant is fatal. An existing file is never an error.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error("failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize default payload")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write progress output")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_create_dir_message_names_path() {
        let err = BootstrapError::CreateDir {
            path: PathBuf::from("/home/dev/.forge_memory"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "failed to create directory /home/dev/.forge_memory"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_write_file_keeps_io_source() {
        let err = BootstrapError::WriteFile {
            path: PathBuf::from("/tmp/vector-db.json"),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        };
        assert_eq!(err.source().map(|s| s.to_string()), Some("disk full".into()));
    }
}
