#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};

use mdstudio_core::{BridgeError, BridgeMode, FileFilter, HostBridge};

/// Scripted in-memory bridge: files in a map, dialog answers in queues.
pub struct FakeBridge {
    pub mode: BridgeMode,
    pub files: RefCell<HashMap<PathBuf, String>>,
    pub writes: RefCell<Vec<(PathBuf, String)>>,
    pub downloads: RefCell<Vec<(String, String)>>,
    pub open_answers: RefCell<VecDeque<Option<PathBuf>>>,
    pub save_answers: RefCell<VecDeque<Option<PathBuf>>>,
    pub save_prompts: RefCell<Vec<String>>,
    pub pending: RefCell<Vec<String>>,
    pub pending_queries: Cell<usize>,
    pub fail_writes: Cell<bool>,
    pub fail_downloads: Cell<bool>,
}

impl FakeBridge {
    pub fn native() -> Self {
        Self::with_mode(BridgeMode::Native)
    }

    pub fn sandboxed() -> Self {
        Self::with_mode(BridgeMode::Sandboxed)
    }

    fn with_mode(mode: BridgeMode) -> Self {
        Self {
            mode,
            files: RefCell::default(),
            writes: RefCell::default(),
            downloads: RefCell::default(),
            open_answers: RefCell::default(),
            save_answers: RefCell::default(),
            save_prompts: RefCell::default(),
            pending: RefCell::default(),
            pending_queries: Cell::new(0),
            fail_writes: Cell::new(false),
            fail_downloads: Cell::new(false),
        }
    }

    pub fn with_file(self, path: &str, text: &str) -> Self {
        self.files
            .borrow_mut()
            .insert(PathBuf::from(path), text.to_string());
        self
    }

    pub fn with_pending(self, paths: &[&str]) -> Self {
        *self.pending.borrow_mut() = paths.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn answer_open(&self, answer: Option<&str>) {
        self.open_answers
            .borrow_mut()
            .push_back(answer.map(PathBuf::from));
    }

    pub fn answer_save(&self, answer: Option<&str>) {
        self.save_answers
            .borrow_mut()
            .push_back(answer.map(PathBuf::from));
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }

    pub fn last_write(&self) -> Option<(PathBuf, String)> {
        self.writes.borrow().last().cloned()
    }
}

impl HostBridge for FakeBridge {
    fn mode(&self) -> BridgeMode {
        self.mode
    }

    fn read_file(&self, path: &Path) -> Result<String, BridgeError> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| BridgeError::Read {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            })
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<(), BridgeError> {
        if self.fail_writes.get() {
            return Err(BridgeError::Write {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only volume"),
            });
        }
        self.writes
            .borrow_mut()
            .push((path.to_path_buf(), contents.to_string()));
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn pick_open_path(&self, _filters: &FileFilter) -> Option<PathBuf> {
        self.open_answers.borrow_mut().pop_front().flatten()
    }

    fn pick_save_path(&self, default_name: &str, _filters: &FileFilter) -> Option<PathBuf> {
        self.save_prompts.borrow_mut().push(default_name.to_string());
        self.save_answers.borrow_mut().pop_front().flatten()
    }

    fn take_pending_open_paths(&self) -> Vec<String> {
        self.pending_queries.set(self.pending_queries.get() + 1);
        std::mem::take(&mut *self.pending.borrow_mut())
    }

    fn download(&self, text: &str, filename: &str) -> Result<(), BridgeError> {
        if self.fail_downloads.get() {
            return Err(BridgeError::Download {
                name: filename.to_string(),
                source: io::Error::new(io::ErrorKind::Other, "download blocked"),
            });
        }
        self.downloads
            .borrow_mut()
            .push((filename.to_string(), text.to_string()));
        Ok(())
    }
}
