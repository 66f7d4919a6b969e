//! Bootstrap configuration
//!
//! There are no flags or config files: the only input is the invoking
//! user's home directory.

use std::path::{Path, PathBuf};

use crate::core::error::BootstrapError;
use crate::core::paths::{memory_dir, ManagedFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    home: PathBuf,
}

impl BootstrapConfig {
    /// Resolve the home directory the standard OS way (`$HOME` on Unix).
    pub fn from_env() -> Result<Self, BootstrapError> {
        dirs::home_dir()
            .map(Self::with_home)
            .ok_or(BootstrapError::HomeNotFound)
    }

    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn memory_dir(&self) -> PathBuf {
        memory_dir(&self.home)
    }

    pub fn file_path(&self, file: &ManagedFile) -> PathBuf {
        self.memory_dir().join(file.name)
    }
}
