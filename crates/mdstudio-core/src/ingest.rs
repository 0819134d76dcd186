//! Ingestion coordinator: four sources, one [`DocumentController::ingest`].
//!
//! Drops and the import picker deliver in-memory blobs and never bind a
//! path. The open dialog and the startup file list deliver paths, which are
//! read through the bridge and bind the document to that path.

use crate::bridge::{FileBlob, FileFilter, HostBridge};
use crate::controller::DocumentController;
use crate::notice::{self, Notice};
use crate::document::UNTITLED_NAME;
use crate::paths::{display_name, is_accepted_file, is_plain_file_name, normalize_path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    Loaded,
    /// Dropped file with a disallowed extension. No notice.
    Ignored,
    /// Dialog dismissed or nothing pending.
    Cancelled,
    /// Read failed; the previous document is untouched.
    Failed,
}

#[derive(Debug, Default)]
pub struct IngestionCoordinator {
    startup_taken: bool,
    torn_down: bool,
}

impl IngestionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drag-and-drop: only `.md`, `.markdown`, `.txt` are accepted.
    pub fn drop_file<B: HostBridge>(
        &mut self,
        controller: &mut DocumentController<B>,
        blob: FileBlob,
    ) -> IngestOutcome {
        if !is_accepted_file(&blob.name) {
            tracing::debug!(name = %blob.name, "ignoring dropped file with unsupported extension");
            return IngestOutcome::Ignored;
        }
        self.ingest_blob(controller, blob)
    }

    /// Import picker: the picker's own filter already applied, no check here.
    pub fn import_file<B: HostBridge>(
        &mut self,
        controller: &mut DocumentController<B>,
        blob: FileBlob,
    ) -> IngestOutcome {
        self.ingest_blob(controller, blob)
    }

    fn ingest_blob<B: HostBridge>(
        &mut self,
        controller: &mut DocumentController<B>,
        blob: FileBlob,
    ) -> IngestOutcome {
        let text = blob.read_text();
        let name = display_name(&blob.name);
        let name = if is_plain_file_name(&name) { name.as_str() } else { UNTITLED_NAME };
        controller.ingest(text, name, None);
        IngestOutcome::Loaded
    }

    /// Native open dialog, then a path-bound load.
    pub fn open_dialog<B: HostBridge>(
        &mut self,
        controller: &mut DocumentController<B>,
    ) -> IngestOutcome {
        let Some(path) = controller.bridge().pick_open_path(&FileFilter::markdown()) else {
            tracing::debug!("open dialog cancelled");
            return IngestOutcome::Cancelled;
        };
        self.open_path(controller, &path.to_string_lossy())
    }

    /// Read `raw_path` through the bridge and bind the document to it.
    pub fn open_path<B: HostBridge>(
        &mut self,
        controller: &mut DocumentController<B>,
        raw_path: &str,
    ) -> IngestOutcome {
        let path = normalize_path(raw_path);
        match controller.bridge().read_file(&path) {
            Ok(text) => {
                let name = display_name(raw_path);
                controller.ingest(text, &name, Some(path));
                IngestOutcome::Loaded
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to open file");
                controller.set_notice(Notice::error(notice::OPEN_FAILED));
                IngestOutcome::Failed
            }
        }
    }

    /// One-shot query of the startup file list. Every call after the first
    /// returns empty, whatever the first call produced.
    pub fn take_startup_paths<B: HostBridge>(
        &mut self,
        controller: &DocumentController<B>,
    ) -> Vec<String> {
        if self.startup_taken {
            return Vec::new();
        }
        self.startup_taken = true;
        controller.bridge().take_pending_open_paths()
    }

    /// Initial activation: load the first startup path, if any.
    pub fn activate<B: HostBridge>(
        &mut self,
        controller: &mut DocumentController<B>,
    ) -> IngestOutcome {
        let paths = self.take_startup_paths(controller);
        if self.torn_down {
            tracing::debug!("coordinator torn down; ignoring startup paths");
            return IngestOutcome::Cancelled;
        }
        match paths.first() {
            Some(first) => {
                if paths.len() > 1 {
                    tracing::info!(extra = paths.len() - 1, "only the first startup file is opened");
                }
                self.open_path(controller, first)
            }
            None => IngestOutcome::Cancelled,
        }
    }

    /// Stop honouring startup results; later activations do nothing.
    pub fn tear_down(&mut self) {
        self.torn_down = true;
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
