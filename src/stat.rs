use std::fs;
use std::io;
use std::path::Path;

/// Lightweight classification of a filesystem path's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// The path does not exist.
    NotFound,
    /// The path exists and is a directory.
    Directory,
    /// The path exists and is a regular file.
    File,
    /// The path exists but is neither a regular file nor a directory
    /// (for example: socket, FIFO, block device).
    Other,
}

impl PathType {
    /// Classify `path` with a single metadata lookup (symlinks followed).
    ///
    /// Intended for simple branching logic; avoids repeated
    /// `exists`/`is_dir`/`is_file` round trips to the filesystem.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        match fs::metadata(path.as_ref()) {
            Ok(meta) => {
                let ft = meta.file_type();
                if ft.is_dir() {
                    PathType::Directory
                } else if ft.is_file() {
                    PathType::File
                } else {
                    PathType::Other
                }
            }
            Err(_) => PathType::NotFound,
        }
    }
}

/// Return `true` if the provided `path` exists (file or directory).
///
/// Existence is probed with one metadata lookup. A lookup that fails with
/// `ErrorKind::AlreadyExists` is still reported as existing — a historical
/// edge case kept intact; see `ensure_dir_with`, whose probe-then-create
/// sequence relies on it being harmless. Every other failure, including
/// not-found and permission-denied, reports `false`.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    match fs::metadata(path.as_ref()) {
        Ok(_) => true,
        Err(e) => e.kind() == io::ErrorKind::AlreadyExists,
    }
}

/// Return `true` if the provided `path` is a directory.
pub fn is_dir<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::Directory
}

/// Return `true` if the provided `path` is a regular file.
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::File
}
