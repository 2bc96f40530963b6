use std::path::{Path, PathBuf};

use crate::Result;
use crate::matching::{contains_fold, eq_fold};
use crate::system::{SystemQuery, verify};

/// Extension of Windows shell link files.
const LINK_EXTENSION: &str = "lnk";

/// Scan a folder of shortcuts for one matching an application name.
///
/// Entries that are not `.lnk` files are skipped. A shortcut matches when
/// `app_name` occurs in its own file name or in the file name of its
/// resolved target; the first match wins and its target is verified to
/// exist on disk. A folder with no matching shortcut yields `Ok(None)`.
pub fn scan_folder(sys: &dyn SystemQuery, dir: &Path, app_name: &str) -> Result<Option<PathBuf>> {
    for entry in sys.list_dir(dir)? {
        if !is_shortcut(&entry) {
            continue;
        }

        let target = sys.resolve_shortcut(&entry)?;
        let file_name = file_name_of(&entry);
        let target_name = file_name_of(&target);

        if contains_fold(file_name, app_name) || contains_fold(target_name, app_name) {
            tracing::debug!(
                "Shortcut {} resolves to {}",
                entry.display(),
                target.display()
            );
            return Ok(verify(sys, Some(target)));
        }
    }

    tracing::debug!("No shortcut in {} matches {}", dir.display(), app_name);
    Ok(None)
}

fn is_shortcut(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| eq_fold(ext, LINK_EXTENSION))
}

fn file_name_of(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}
