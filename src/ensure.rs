use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::notice::{ConsoleNotice, NoticeSink};
use crate::stat::exists;

/// Error returned when a directory tree cannot be created.
///
/// Wraps the underlying `std::io::Error`, e.g. permission denial or an
/// intermediate path segment that is a regular file.
#[derive(Debug, Error)]
#[error("create directory error: {0}")]
pub struct EnsureError(#[from] pub io::Error);

/// Create the directory `path`, and any missing ancestors, if it does not
/// already exist.
///
/// Each tree that is actually created is reported once through `sink`. An
/// already-present path is a no-op and produces no notice, so the call is
/// idempotent: calling twice in a row notices at most once. Any existing
/// entry at `path` counts as present, directory or not; the entry is left
/// untouched.
///
/// New directories get the platform's permissive default mode (the process
/// umask applies).
pub fn ensure_dir_with<P: AsRef<Path>>(
    path: P,
    sink: &mut dyn NoticeSink,
) -> Result<(), EnsureError> {
    let p = path.as_ref();
    if exists(p) {
        return Ok(());
    }
    fs::create_dir_all(p)?;
    tracing::debug!("created directory {}", p.display());
    sink.created(p);
    Ok(())
}

/// Create the directory `path`, and any missing ancestors, if it does not
/// already exist, printing `Create directory: <path>` to standard output
/// for each actual creation.
///
/// See [`ensure_dir_with`] to direct the notice elsewhere.
///
/// # Examples
///
/// ```no_run
/// use pathkit::ensure_dir;
/// ensure_dir("/tmp/build/artifacts").expect("create failed");
/// ```
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<(), EnsureError> {
    ensure_dir_with(path, &mut ConsoleNotice)
}

/// Ensure the parent directory of `path` exists, for callers about to
/// write a file there.
///
/// Quiet: no notice is emitted. A path with no parent component (a bare
/// file name, or the root) is a no-op.
pub fn ensure_parent_exists<P: AsRef<Path>>(path: P) -> Result<(), EnsureError> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() && !exists(parent) {
            fs::create_dir_all(parent)?;
            tracing::debug!("created parent directory {}", parent.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::MemoryNotice;
    use tempfile::tempdir;

    #[test]
    fn creates_missing_tree_and_notices_once() {
        let td = tempdir().expect("tempdir");
        let target = td.path().join("a/b/c");
        let mut sink = MemoryNotice::new();

        ensure_dir_with(&target, &mut sink).expect("create tree");

        assert!(target.is_dir(), "target tree should exist");
        assert_eq!(sink.paths(), &[target.clone()]);
    }

    #[test]
    fn existing_dir_is_a_quiet_no_op() {
        let td = tempdir().expect("tempdir");
        let mut sink = MemoryNotice::new();

        ensure_dir_with(td.path(), &mut sink).expect("no-op");

        assert!(td.path().is_dir());
        assert!(sink.paths().is_empty(), "no notice for a present path");
    }

    #[test]
    fn second_call_does_not_notice_again() {
        let td = tempdir().expect("tempdir");
        let target = td.path().join("once");
        let mut sink = MemoryNotice::new();

        ensure_dir_with(&target, &mut sink).expect("first create");
        ensure_dir_with(&target, &mut sink).expect("second call");

        assert_eq!(sink.paths().len(), 1, "at most one notice across calls");
    }

    #[test]
    fn existing_file_at_target_is_left_alone() {
        let td = tempdir().expect("tempdir");
        let target = td.path().join("occupied");
        std::fs::write(&target, b"data").expect("write file");
        let mut sink = MemoryNotice::new();

        ensure_dir_with(&target, &mut sink).expect("present entry is a no-op");

        assert!(target.is_file(), "entry must not be replaced");
        assert!(sink.paths().is_empty());
    }

    #[test]
    fn file_as_intermediate_segment_errors() {
        let td = tempdir().expect("tempdir");
        let blocker = td.path().join("blocker");
        std::fs::write(&blocker, b"not a dir").expect("write blocker");
        let mut sink = MemoryNotice::new();

        let res = ensure_dir_with(blocker.join("child"), &mut sink);

        assert!(res.is_err(), "creation through a file must fail");
        assert!(sink.paths().is_empty(), "no notice on the failure path");
    }

    #[test]
    fn ensure_parent_creates_parent_only() {
        let td = tempdir().expect("tempdir");
        let file = td.path().join("deep/nest/file.txt");

        ensure_parent_exists(&file).expect("create parent");

        assert!(file.parent().unwrap().is_dir(), "parent should exist");
        assert!(!file.exists(), "leaf must not be created");
    }

    #[test]
    fn ensure_parent_on_bare_name_is_ok() {
        ensure_parent_exists("bare-name").expect("bare name is a no-op");
    }
}
