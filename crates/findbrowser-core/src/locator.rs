use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::system::SystemQuery;
use crate::{Result, registry, shortcut};

/// Per-user registry branch mapping well-known shell folders to paths.
const SHELL_FOLDERS_BRANCH: &str =
    r"Software\Microsoft\Windows\CurrentVersion\Explorer\Shell Folders";

/// Start Menu programs folder shared by all users.
const START_MENU_PROGRAMS: &str = r"C:\ProgramData\Microsoft\Windows\Start Menu\Programs";

/// Browsers this crate knows how to locate.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Browser {
    Chrome,
    Edge,
}

impl Browser {
    pub const ALL: [Browser; 2] = [Browser::Chrome, Browser::Edge];

    /// Stable identifier, also the key used in serialized [`BrowserPaths`].
    pub fn id(self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Edge => "msedge",
        }
    }

    /// Executable name the browser registers under the App Paths branch.
    fn executable(self) -> &'static str {
        match self {
            Browser::Chrome => "chrome.exe",
            Browser::Edge => "msedge.exe",
        }
    }

    /// Name its shortcuts are usually titled with.
    fn shortcut_name(self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Edge => "Microsoft Edge",
        }
    }
}

/// Where each supported browser was found, if anywhere.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct BrowserPaths {
    pub chrome: Option<PathBuf>,
    pub msedge: Option<PathBuf>,
}

impl BrowserPaths {
    pub fn get(&self, browser: Browser) -> Option<&Path> {
        match browser {
            Browser::Chrome => self.chrome.as_deref(),
            Browser::Edge => self.msedge.as_deref(),
        }
    }

    fn set(&mut self, browser: Browser, path: Option<PathBuf>) {
        match browser {
            Browser::Chrome => self.chrome = path,
            Browser::Edge => self.msedge = path,
        }
    }
}

/// Folder holding the current user's desktop shortcuts.
///
/// Read from the per-user Shell Folders registry branch. A missing branch
/// or value means the profile is broken; the error propagates to the
/// caller.
pub fn desktop_dir(sys: &dyn SystemQuery) -> Result<PathBuf> {
    sys.user_string_value(SHELL_FOLDERS_BRANCH, "Desktop")
        .map(PathBuf::from)
}

/// Locate every supported browser.
///
/// Each browser is looked up in the App Paths registry branch first, then
/// among the desktop shortcuts, then in the all-users Start Menu. A browser
/// found nowhere is left unset in the result.
pub fn locate_browsers(sys: &dyn SystemQuery) -> Result<BrowserPaths> {
    let desktop = desktop_dir(sys)?;
    let mut paths = BrowserPaths::default();

    for browser in Browser::ALL {
        let mut found = registry::find_app_path(sys, browser.executable(), browser.executable())?;

        if found.is_none() {
            tracing::debug!("{} not in App Paths, checking desktop shortcuts", browser.id());
            found = shortcut::scan_folder(sys, &desktop, browser.shortcut_name())?;
        }
        if found.is_none() {
            tracing::debug!("{} not on desktop, checking the Start Menu", browser.id());
            found = shortcut::scan_folder(
                sys,
                Path::new(START_MENU_PROGRAMS),
                browser.shortcut_name(),
            )?;
        }

        match &found {
            Some(path) => tracing::info!("Found {} at {}", browser.id(), path.display()),
            None => tracing::info!("{} not found", browser.id()),
        }
        paths.set(browser, found);
    }

    Ok(paths)
}
