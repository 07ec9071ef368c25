//! Creation notices.
//!
//! `ensure_dir_with` reports each directory tree it actually creates
//! through a `NoticeSink` handed in by the caller, so embedding code
//! decides where the human-readable line goes and tests can capture it
//! without intercepting process output.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Receiver for human-readable directory-creation notices.
pub trait NoticeSink {
    /// Called once per directory tree that was actually created.
    fn created(&mut self, path: &Path);
}

/// Writes one line per created path to standard output.
///
/// Line format: `Create directory: <path>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotice;

impl NoticeSink for ConsoleNotice {
    fn created(&mut self, path: &Path) {
        let mut out = io::stdout().lock();
        // A notice is advisory output; a failed write (closed stdout,
        // broken pipe) must not fail the creation that already happened.
        let _ = writeln!(out, "Create directory: {}", path.display());
    }
}

/// Buffers created paths in memory for later inspection.
///
/// Use this in tests to assert which paths were reported created, and how
/// often.
#[derive(Debug, Default)]
pub struct MemoryNotice {
    paths: Vec<PathBuf>,
}

impl MemoryNotice {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All paths reported created so far, in call order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl NoticeSink for MemoryNotice {
    fn created(&mut self, path: &Path) {
        self.paths.push(path.to_path_buf());
    }
}
