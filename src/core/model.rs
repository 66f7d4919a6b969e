//! Bootstrap outcome model

use std::path::PathBuf;

/// What happened to a single managed file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// File was absent and has been written with the default payload
    Created,
    /// File already existed and was left untouched
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn new(path: impl Into<PathBuf>, outcome: FileOutcome) -> Self {
        Self {
            path: path.into(),
            outcome,
        }
    }
}

/// Result of a complete bootstrap run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub memory_dir: PathBuf,
    pub files: Vec<FileReport>,
}

impl BootstrapReport {
    pub fn new(memory_dir: impl Into<PathBuf>) -> Self {
        Self {
            memory_dir: memory_dir.into(),
            files: Vec::new(),
        }
    }

    pub fn push(&mut self, report: FileReport) {
        self.files.push(report);
    }

    /// Number of files created on this run
    pub fn created(&self) -> usize {
        self.count(FileOutcome::Created)
    }

    /// Number of files left untouched on this run
    pub fn skipped(&self) -> usize {
        self.count(FileOutcome::Skipped)
    }

    fn count(&self, outcome: FileOutcome) -> usize {
        self.files.iter().filter(|f| f.outcome == outcome).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let mut report = BootstrapReport::new("/home/dev/.forge_memory");
        report.push(FileReport::new("a.json", FileOutcome::Created));
        report.push(FileReport::new("b.json", FileOutcome::Skipped));

        assert_eq!(report.created(), 1);
        assert_eq!(report.skipped(), 1);
    }

    #[test]
    fn test_empty_report() {
        let report = BootstrapReport::new("/tmp");
        assert_eq!(report.created(), 0);
        assert_eq!(report.skipped(), 0);
        assert!(report.files.is_empty());
    }
}
