use std::path::PathBuf;

use crate::Result;
use crate::matching::{ends_with_fold, eq_fold};
use crate::system::{SystemQuery, verify};

/// Machine-wide registry branch where installers register executable paths.
pub const APP_PATHS_BRANCH: &str = r"SOFTWARE\Microsoft\Windows\CurrentVersion\App Paths";

/// Search the App Paths registry branch for an application's executable.
///
/// `name_keyword` selects a sub-key (installers typically register the bare
/// executable name, e.g. `chrome.exe`); `value_keyword` selects a value
/// within it by suffix, with the sub-key name itself accepted as an
/// alternative suffix. All comparisons are case-insensitive. The returned
/// path is verified to exist on disk; any miss is `Ok(None)`.
pub fn find_app_path(
    sys: &dyn SystemQuery,
    value_keyword: &str,
    name_keyword: &str,
) -> Result<Option<PathBuf>> {
    for key_name in sys.machine_subkeys(APP_PATHS_BRANCH)? {
        if !eq_fold(&key_name, name_keyword) {
            continue;
        }

        let branch = format!(r"{APP_PATHS_BRANCH}\{key_name}");
        let candidate = sys
            .machine_values(&branch)?
            .into_iter()
            .find(|value| ends_with_fold(value, value_keyword) || ends_with_fold(value, &key_name));

        tracing::debug!(
            "App Paths entry {} yielded candidate {:?}",
            key_name,
            candidate
        );
        return Ok(verify(sys, candidate.map(PathBuf::from)));
    }

    tracing::debug!("No App Paths entry matches {}", name_keyword);
    Ok(None)
}
