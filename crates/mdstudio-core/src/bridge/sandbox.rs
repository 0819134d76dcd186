//! Sandboxed bridge: no filesystem paths, only blobs and downloads.
//!
//! A download is the only persistence it offers. It lands in a downloads
//! directory under the document's display name, the way a browser saves an
//! anchor-click download.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::{BridgeError, BridgeMode, FileFilter, HostBridge};
use crate::paths::{display_name, is_plain_file_name};

/// Name used when the requested one has no plain file-name segment.
pub const FALLBACK_DOWNLOAD_NAME: &str = "download.md";

pub struct SandboxBridge {
    download_dir: PathBuf,
}

impl SandboxBridge {
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            download_dir: download_dir.into(),
        }
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }
}

fn no_path_access() -> io::Error {
    io::Error::new(
        io::ErrorKind::PermissionDenied,
        "no filesystem path access in sandboxed mode",
    )
}

impl HostBridge for SandboxBridge {
    fn mode(&self) -> BridgeMode {
        BridgeMode::Sandboxed
    }

    fn read_file(&self, path: &Path) -> Result<String, BridgeError> {
        Err(BridgeError::Read {
            path: path.to_path_buf(),
            source: no_path_access(),
        })
    }

    fn write_file(&self, path: &Path, _contents: &str) -> Result<(), BridgeError> {
        Err(BridgeError::Write {
            path: path.to_path_buf(),
            source: no_path_access(),
        })
    }

    fn pick_open_path(&self, _filters: &FileFilter) -> Option<PathBuf> {
        None
    }

    fn pick_save_path(&self, _default_name: &str, _filters: &FileFilter) -> Option<PathBuf> {
        None
    }

    fn take_pending_open_paths(&self) -> Vec<String> {
        Vec::new()
    }

    fn download(&self, text: &str, filename: &str) -> Result<(), BridgeError> {
        download_to(&self.download_dir, text, filename).map(|_| ())
    }
}

// ---------------------------------------------------------------------------
// Download helpers
// ---------------------------------------------------------------------------

/// Where a download named `filename` lands inside `dir`.
///
/// Uses the plain name while it is free, otherwise `<stem>-<uuid>.<ext>`
/// so an earlier download is never overwritten. The directory is not
/// created here.
pub fn download_path(dir: &Path, filename: &str) -> PathBuf {
    let name = display_name(filename);
    let name = if is_plain_file_name(&name) {
        name
    } else {
        FALLBACK_DOWNLOAD_NAME.to_string()
    };
    let plain = dir.join(&name);
    if !plain.exists() {
        return plain;
    }
    let unique = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{}-{}.{}", stem, Uuid::new_v4(), ext),
        _ => format!("{}-{}", name, Uuid::new_v4()),
    };
    dir.join(unique)
}

/// Write `text` into `dir` as a download; returns the file actually written.
pub fn download_to(dir: &Path, text: &str, filename: &str) -> Result<PathBuf, BridgeError> {
    let fail = |source| BridgeError::Download {
        name: filename.to_string(),
        source,
    };
    fs::create_dir_all(dir).map_err(fail)?;
    let target = download_path(dir, filename);
    fs::write(&target, text).map_err(fail)?;
    tracing::debug!(path = %target.display(), "download written");
    Ok(target)
}
