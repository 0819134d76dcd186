//! Host Bridge: the capability interface the controller is written against.
//!
//! Two implementations exist. The native one (root crate) reads and writes
//! real paths and shows platform dialogs; [`sandbox::SandboxBridge`] has no
//! path access at all and persists through synthetic downloads. The mode is
//! chosen once at process start.

pub mod sandbox;

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths::ACCEPTED_EXTENSIONS;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BridgeMode {
    /// Real filesystem paths through platform dialogs.
    #[default]
    Native,
    /// No path access: in-memory blobs in, downloads out.
    Sandboxed,
}

/// Dialog filter: a label plus extensions without the leading dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub name: String,
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(name: &str, extensions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// `.md`, `.markdown`, `.txt`.
    pub fn markdown() -> Self {
        Self::new("Markdown", ACCEPTED_EXTENSIONS)
    }
}

/// An in-memory file without a filesystem binding (drop or import picker).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBlob {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl FileBlob {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Decode as UTF-8; invalid sequences become U+FFFD like a text reader.
    pub fn read_text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to download {name}: {source}")]
    Download {
        name: String,
        #[source]
        source: io::Error,
    },
}

// ---------------------------------------------------------------------------
// Capability trait
// ---------------------------------------------------------------------------

/// Platform file I/O and dialogs.
///
/// Dialog methods return `None` when the user cancels; that is a normal
/// outcome, not an error. In [`BridgeMode::Sandboxed`] the path methods are
/// never reached by the controller and `download` is the only way out.
pub trait HostBridge {
    fn mode(&self) -> BridgeMode;

    fn read_file(&self, path: &Path) -> Result<String, BridgeError>;

    fn write_file(&self, path: &Path, contents: &str) -> Result<(), BridgeError>;

    fn pick_open_path(&self, filters: &FileFilter) -> Option<PathBuf>;

    fn pick_save_path(&self, default_name: &str, filters: &FileFilter) -> Option<PathBuf>;

    /// Paths handed over by the file association at startup. Drains the
    /// list: every later call returns empty.
    fn take_pending_open_paths(&self) -> Vec<String>;

    /// Browser-style save of `text` under `filename`, no path feedback.
    fn download(&self, text: &str, filename: &str) -> Result<(), BridgeError>;
}
