//! Filesystem convenience helpers: existence probes, lexical parent
//! computation, and create-if-absent directory trees.

pub mod ensure;
pub mod notice;
pub mod parent;
pub mod stat;

pub use crate::ensure::{ensure_dir, ensure_dir_with, ensure_parent_exists, EnsureError};
pub use crate::notice::{ConsoleNotice, MemoryNotice, NoticeSink};
pub use crate::parent::parent_directory;
pub use crate::stat::{exists, is_dir, is_file, PathType};
