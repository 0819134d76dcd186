//! Document lifecycle: ingest, edit, save and save-as.
//!
//! The controller is the single owner of the open [`Document`] and of the
//! status [`Notice`]. Bridge failures are caught here, logged, and turned
//! into an error notice; they never change the document.

use std::path::PathBuf;

use crate::bridge::{BridgeMode, FileFilter, HostBridge};
use crate::document::Document;
use crate::notice::{self, Notice};
use crate::paths::display_name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Written to the bound (or newly chosen) path.
    Saved(PathBuf),
    /// Handed to the sandbox as a download; no path was bound.
    Downloaded,
    /// The save dialog was dismissed.
    Cancelled,
    /// The bridge reported an error; state is unchanged.
    Failed,
}

pub struct DocumentController<B: HostBridge> {
    bridge: B,
    document: Document,
    notice: Option<Notice>,
}

impl<B: HostBridge> DocumentController<B> {
    /// Start with the sample document and no notice.
    pub fn new(bridge: B) -> Self {
        Self {
            bridge,
            document: Document::sample(),
            notice: None,
        }
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.document.is_dirty()
    }

    pub fn can_persist(&self) -> bool {
        self.document.can_persist()
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Replace the document wholesale. Last ingestion wins: unsaved edits
    /// are discarded without asking.
    pub fn ingest(&mut self, raw_text: String, source_name: &str, source_identity: Option<PathBuf>) {
        if self.document.is_dirty() {
            tracing::warn!(
                discarded = %self.document.display_name(),
                incoming = %source_name,
                "replacing document with unsaved changes"
            );
        }
        self.document = Document::loaded(raw_text, source_name.to_string(), source_identity);
        self.notice = None;
        tracing::info!(
            name = %self.document.display_name(),
            path = %self.document.path_label(),
            "document loaded"
        );
    }

    /// Replace the buffer. A lingering success notice goes away as soon as
    /// the edit leaves the document dirty.
    pub fn edit(&mut self, new_text: impl Into<String>) {
        self.document.set_content(new_text.into());
        let stale = self.notice.as_ref().is_some_and(Notice::is_success);
        if stale && self.document.is_dirty() {
            self.notice = None;
        }
    }

    /// Write to the bound path, or fall through to [`Self::save_as`].
    pub fn save(&mut self) -> SaveOutcome {
        let Some(path) = self.document.identity().map(|p| p.to_path_buf()) else {
            return self.save_as();
        };
        match self.bridge.write_file(&path, self.document.content()) {
            Ok(()) => {
                self.document.mark_persisted();
                self.notice = Some(Notice::success(notice::SAVED));
                tracing::info!(path = %path.display(), "document saved");
                SaveOutcome::Saved(path)
            }
            Err(err) => self.save_failed(err),
        }
    }

    /// Ask for a destination and save there. Sandboxed bridges download
    /// under the display name instead and stay unbound.
    pub fn save_as(&mut self) -> SaveOutcome {
        match self.bridge.mode() {
            BridgeMode::Native => self.save_to_chosen_path(),
            BridgeMode::Sandboxed => self.save_as_download(),
        }
    }

    fn save_to_chosen_path(&mut self) -> SaveOutcome {
        let filters = FileFilter::markdown();
        let Some(path) = self
            .bridge
            .pick_save_path(self.document.display_name(), &filters)
        else {
            tracing::debug!("save dialog cancelled");
            return SaveOutcome::Cancelled;
        };
        match self.bridge.write_file(&path, self.document.content()) {
            Ok(()) => {
                let name = display_name(&path.to_string_lossy());
                self.document.bind(path.clone(), name);
                self.document.mark_persisted();
                self.notice = Some(Notice::success(notice::SAVED));
                tracing::info!(path = %path.display(), "document saved to new location");
                SaveOutcome::Saved(path)
            }
            Err(err) => self.save_failed(err),
        }
    }

    fn save_as_download(&mut self) -> SaveOutcome {
        match self
            .bridge
            .download(self.document.content(), self.document.display_name())
        {
            Ok(()) => {
                self.document.mark_persisted();
                self.notice = Some(Notice::success(notice::SAVED));
                tracing::info!(name = %self.document.display_name(), "document downloaded");
                SaveOutcome::Downloaded
            }
            Err(err) => self.save_failed(err),
        }
    }

    fn save_failed(&mut self, err: crate::bridge::BridgeError) -> SaveOutcome {
        tracing::warn!(error = %err, "save failed");
        self.notice = Some(Notice::error(notice::SAVE_FAILED));
        SaveOutcome::Failed
    }
}
