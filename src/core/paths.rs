//! Memory directory layout
//!
//! Everything lives under `<home>/.forge_memory/`.

use std::path::{Path, PathBuf};

/// Name of the memory directory under the user's home
pub const MEMORY_DIR_NAME: &str = ".forge_memory";

/// Managed file names
pub const PROJECT_CACHE_FILE: &str = "project-cache.json";
pub const VECTOR_DB_FILE: &str = "vector-db.json";

/// A placeholder data file the bootstrapper is responsible for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagedFile {
    /// File name inside the memory directory
    pub name: &'static str,
    /// Short label used in diagnostics
    pub label: &'static str,
}

pub const PROJECT_CACHE: ManagedFile = ManagedFile {
    name: PROJECT_CACHE_FILE,
    label: "project-cache",
};

pub const VECTOR_DB: ManagedFile = ManagedFile {
    name: VECTOR_DB_FILE,
    label: "vector-db",
};

/// Files initialized on every run, in order
pub const MANAGED_FILES: [ManagedFile; 2] = [PROJECT_CACHE, VECTOR_DB];

/// Get the memory directory for a given home
pub fn memory_dir(home: &Path) -> PathBuf {
    home.join(MEMORY_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_dir() {
        let home = Path::new("/home/dev");
        assert_eq!(memory_dir(home), PathBuf::from("/home/dev/.forge_memory"));
    }

    #[test]
    fn test_managed_files_are_distinct() {
        assert_eq!(MANAGED_FILES.len(), 2);
        assert_ne!(MANAGED_FILES[0].name, MANAGED_FILES[1].name);
    }

    #[test]
    fn test_managed_file_order() {
        assert_eq!(MANAGED_FILES[0], PROJECT_CACHE);
        assert_eq!(MANAGED_FILES[1], VECTOR_DB);
    }
}
