use std::path::{Path, PathBuf};

use windows::Win32::Foundation::RPC_E_CHANGED_MODE;
use windows::Win32::Storage::FileSystem::WIN32_FIND_DATAW;
use windows::Win32::System::Com::{
    CLSCTX_INPROC_SERVER, COINIT_APARTMENTTHREADED, CoCreateInstance, CoInitializeEx,
    CoUninitialize, IPersistFile, STGM_READ,
};
use windows::Win32::UI::Shell::{IShellLinkW, ShellLink};
use windows::core::{HSTRING, Interface};
use winreg::RegKey;
use winreg::enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE};
use winreg::types::FromRegValue;

use super::SystemQuery;
use crate::error::{Error, Result};

const MAX_PATH: usize = 260;

/// [`SystemQuery`] backed by the live registry and filesystem.
#[derive(Default)]
pub struct WindowsSystem;

impl WindowsSystem {
    pub fn new() -> Self {
        Self
    }
}

impl SystemQuery for WindowsSystem {
    fn user_string_value(&self, branch: &str, name: &str) -> Result<String> {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let key = hkcu.open_subkey(branch).map_err(Error::Registry)?;
        // The key handle closes on drop, on the error path included.
        key.get_value(name).map_err(Error::Registry)
    }

    fn machine_subkeys(&self, branch: &str) -> Result<Vec<String>> {
        let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
        let key = hklm.open_subkey(branch).map_err(Error::Registry)?;
        key.enum_keys()
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(Error::Registry)
    }

    fn machine_values(&self, branch: &str) -> Result<Vec<String>> {
        let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
        let key = hklm.open_subkey(branch).map_err(Error::Registry)?;
        let mut values = Vec::new();
        for value in key.enum_values() {
            let (_, data) = value.map_err(Error::Registry)?;
            // Non-string data under App Paths is of no use here.
            if let Ok(text) = String::from_reg_value(&data) {
                values.push(text);
            }
        }
        Ok(values)
    }

    fn list_dir(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            entries.push(entry?.path());
        }
        Ok(entries)
    }

    fn resolve_shortcut(&self, shortcut: &Path) -> Result<PathBuf> {
        let _com = ComGuard::new().map_err(|e| shortcut_error(shortcut, &e))?;

        unsafe {
            let link: IShellLinkW = CoCreateInstance(&ShellLink, None, CLSCTX_INPROC_SERVER)
                .map_err(|e| shortcut_error(shortcut, &e))?;
            let persist: IPersistFile =
                link.cast().map_err(|e| shortcut_error(shortcut, &e))?;
            persist
                .Load(&HSTRING::from(shortcut), STGM_READ)
                .map_err(|e| shortcut_error(shortcut, &e))?;

            let mut target = [0u16; MAX_PATH];
            let mut find_data = WIN32_FIND_DATAW::default();
            link.GetPath(&mut target, &mut find_data, 0)
                .map_err(|e| shortcut_error(shortcut, &e))?;

            let len = target.iter().position(|&c| c == 0).unwrap_or(target.len());
            Ok(PathBuf::from(String::from_utf16_lossy(&target[..len])))
        }
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn shortcut_error(path: &Path, err: &windows::core::Error) -> Error {
    Error::Shortcut {
        path: path.to_path_buf(),
        message: err.message(),
    }
}

/// Scoped COM apartment. Uninitializes on drop, whatever path exits first.
struct ComGuard {
    should_uninit: bool,
}

impl ComGuard {
    fn new() -> windows::core::Result<Self> {
        unsafe {
            match CoInitializeEx(None, COINIT_APARTMENTTHREADED).ok() {
                Ok(()) => Ok(Self {
                    should_uninit: true,
                }),
                // Already initialized with a different model on this thread.
                Err(e) if e.code() == RPC_E_CHANGED_MODE => Ok(Self {
                    should_uninit: false,
                }),
                Err(e) => Err(e),
            }
        }
    }
}

impl Drop for ComGuard {
    fn drop(&mut self) {
        if self.should_uninit {
            unsafe { CoUninitialize() };
        }
    }
}
