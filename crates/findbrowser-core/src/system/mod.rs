use std::path::{Path, PathBuf};

use crate::Result;

#[cfg(windows)]
pub mod windows;

/// Read-only view of the host system used by the lookup functions.
///
/// The lookup code never touches the registry or filesystem directly; it
/// asks an implementation of this trait. Production code uses
/// [`windows::WindowsSystem`], tests use an in-memory fake.
pub trait SystemQuery {
    /// Read a string value from a branch of the current user's registry hive.
    fn user_string_value(&self, branch: &str, name: &str) -> Result<String>;

    /// Immediate sub-key names of a branch in the local machine hive.
    fn machine_subkeys(&self, branch: &str) -> Result<Vec<String>>;

    /// String value data stored directly under a branch of the local machine hive.
    fn machine_values(&self, branch: &str) -> Result<Vec<String>>;

    /// Paths of the entries in `dir`, in listing order.
    fn list_dir(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// Resolve a `.lnk` shortcut file to its target path.
    fn resolve_shortcut(&self, shortcut: &Path) -> Result<PathBuf>;

    /// Whether `path` currently exists on disk.
    fn path_exists(&self, path: &Path) -> bool;
}

/// Discard a candidate path unless it exists on disk.
///
/// `None` passes through unchanged; a logical miss is not an error.
pub fn verify(sys: &dyn SystemQuery, candidate: Option<PathBuf>) -> Option<PathBuf> {
    match candidate {
        Some(path) if sys.path_exists(&path) => Some(path),
        Some(path) => {
            tracing::debug!("Discarding candidate that is not on disk: {}", path.display());
            None
        }
        None => None,
    }
}
