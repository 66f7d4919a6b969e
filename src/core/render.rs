//! Renderer module
//!
//! Formats the human-readable progress lines printed on stdout.

use std::io::{self, Write};
use std::path::Path;

use crate::core::model::{FileOutcome, FileReport};

/// Line printed for a single managed file
pub fn file_line(report: &FileReport) -> String {
    match report.outcome {
        FileOutcome::Created => format!("Created {}", report.path.display()),
        FileOutcome::Skipped => {
            format!("{} already exists; not overwriting.", report.path.display())
        }
    }
}

/// Final line printed once every file has been handled
pub fn complete_line(memory_dir: &Path) -> String {
    format!("Bootstrap complete. Review files in {}.", memory_dir.display())
}

/// Writes progress lines to a sink (stdout in the binary)
pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn file(&mut self, report: &FileReport) -> io::Result<()> {
        writeln!(self.out, "{}", file_line(report))
    }

    pub fn complete(&mut self, memory_dir: &Path) -> io::Result<()> {
        writeln!(self.out, "{}", complete_line(memory_dir))?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_created_line() {
        let report = FileReport::new("/h/.forge_memory/vector-db.json", FileOutcome::Created);
        assert_eq!(file_line(&report), "Created /h/.forge_memory/vector-db.json");
    }

    #[test]
    fn test_skipped_line() {
        let report = FileReport::new("/h/.forge_memory/project-cache.json", FileOutcome::Skipped);
        assert_eq!(
            file_line(&report),
            "/h/.forge_memory/project-cache.json already exists; not overwriting."
        );
    }

    #[test]
    fn test_renderer_writes_lines_in_order() {
        let mut buf = Vec::new();
        {
            let mut renderer = Renderer::new(&mut buf);
            renderer
                .file(&FileReport::new("/h/a.json", FileOutcome::Created))
                .unwrap();
            renderer.complete(&PathBuf::from("/h")).unwrap();
        }
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Created /h/a.json\nBootstrap complete. Review files in /h.\n"
        );
    }
}
