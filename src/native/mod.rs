//! Native Host Bridge: real paths, real files, platform dialogs.

pub mod dialogs;

#[cfg(target_os = "macos")]
pub mod appkit;

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use mdstudio_core::bridge::sandbox::download_to;
use mdstudio_core::paths::normalize_path;
use mdstudio_core::{BridgeError, BridgeMode, FileFilter, HostBridge};

use self::dialogs::PathDialogs;

pub struct NativeBridge {
    dialogs: Box<dyn PathDialogs>,
    /// Files handed over on the command line, drained on first take.
    pending: RefCell<Vec<String>>,
    download_dir: PathBuf,
}

impl NativeBridge {
    pub fn new(dialogs: Box<dyn PathDialogs>, pending: Vec<String>, download_dir: PathBuf) -> Self {
        Self {
            dialogs,
            pending: RefCell::new(pending),
            download_dir,
        }
    }
}

/// Strip platform quoting the same way for reads and writes.
fn clean(path: &Path) -> PathBuf {
    normalize_path(&path.to_string_lossy())
}

impl HostBridge for NativeBridge {
    fn mode(&self) -> BridgeMode {
        BridgeMode::Native
    }

    fn read_file(&self, path: &Path) -> Result<String, BridgeError> {
        let path = clean(path);
        fs::read_to_string(&path).map_err(|source| BridgeError::Read { path, source })
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<(), BridgeError> {
        let path = clean(path);
        fs::write(&path, contents).map_err(|source| BridgeError::Write { path, source })
    }

    fn pick_open_path(&self, filters: &FileFilter) -> Option<PathBuf> {
        self.dialogs.pick_open(filters)
    }

    fn pick_save_path(&self, default_name: &str, filters: &FileFilter) -> Option<PathBuf> {
        self.dialogs.pick_save(default_name, filters)
    }

    fn take_pending_open_paths(&self) -> Vec<String> {
        std::mem::take(&mut *self.pending.borrow_mut())
    }

    fn download(&self, text: &str, filename: &str) -> Result<(), BridgeError> {
        download_to(&self.download_dir, text, filename).map(|_| ())
    }
}
