use std::path::{Path, PathBuf};

/// Return the lexical parent directory of `path`.
///
/// This is a pure path computation: it never touches the filesystem and
/// does not require `path` to exist.
///
/// Behaviour:
/// - Trailing separators are ignored: `/a/b/c/` and `/a/b/c` both yield
///   `/a/b`.
/// - A path with no separator (`single`, `.`, `..`, the empty path) yields
///   `.`.
/// - A root path yields itself: `/` stays `/`.
/// - `..` segments are not normalized; the result is the input minus its
///   final component (`a/b/../c` yields `a/b/..`).
pub fn parent_directory<P: AsRef<Path>>(path: P) -> PathBuf {
    let p = path.as_ref();
    match p.parent() {
        // `Path::parent` reports the parent of a bare file name as the
        // empty path; map that onto the current directory.
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        // No parent component: the root (which is its own parent) or the
        // empty path.
        None => {
            if p.as_os_str().is_empty() {
                PathBuf::from(".")
            } else {
                p.to_path_buf()
            }
        }
    }
}
