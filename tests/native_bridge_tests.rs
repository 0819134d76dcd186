use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use mdstudio::console::ReaderLines;
use mdstudio::native::dialogs::{ConsoleDialogs, PathDialogs};
use mdstudio::native::NativeBridge;
use mdstudio_core::{BridgeMode, FileFilter, HostBridge};

struct NoDialogs;

impl PathDialogs for NoDialogs {
    fn pick_open(&self, _filters: &FileFilter) -> Option<PathBuf> {
        None
    }

    fn pick_save(&self, _default_name: &str, _filters: &FileFilter) -> Option<PathBuf> {
        None
    }
}

fn bridge(dir: &Path, pending: Vec<String>) -> NativeBridge {
    NativeBridge::new(Box::new(NoDialogs), pending, dir.join("downloads"))
}

#[test]
fn reads_and_writes_real_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("a.md");
    let b = bridge(dir.path(), Vec::new());
    assert_eq!(b.mode(), BridgeMode::Native);

    b.write_file(&path, "# A\n").expect("write");
    assert_eq!(b.read_file(&path).expect("read"), "# A\n");
}

#[test]
fn quoted_paths_are_unquoted_before_io() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("q.md");
    fs::write(&path, "quoted").expect("seed");
    let quoted = PathBuf::from(format!("\"{}\"", path.display()));

    let b = bridge(dir.path(), Vec::new());
    assert_eq!(b.read_file(&quoted).expect("read"), "quoted");
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let b = bridge(dir.path(), Vec::new());
    let err = b.read_file(&dir.path().join("nope.md")).unwrap_err();
    assert!(err.to_string().contains("nope.md"), "got: {err}");
}

#[test]
fn write_into_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let b = bridge(dir.path(), Vec::new());
    assert!(b.write_file(&dir.path().join("no/such/dir/a.md"), "x").is_err());
}

#[test]
fn pending_paths_drain_on_first_take() {
    let dir = tempfile::tempdir().expect("tempdir");
    let b = bridge(dir.path(), vec!["/p/a.md".to_string()]);
    assert_eq!(b.take_pending_open_paths(), vec!["/p/a.md".to_string()]);
    assert!(b.take_pending_open_paths().is_empty());
}

#[test]
fn console_dialog_returns_typed_path() {
    let input = ReaderLines(Cursor::new("\"/tmp/x.md\"\n"));
    let dialogs = ConsoleDialogs::new(Box::new(input), Box::new(std::io::sink()));
    assert_eq!(
        dialogs.pick_open(&FileFilter::markdown()),
        Some(PathBuf::from("/tmp/x.md"))
    );
}

#[test]
fn console_dialog_empty_answer_cancels() {
    let input = ReaderLines(Cursor::new("\n"));
    let dialogs = ConsoleDialogs::new(Box::new(input), Box::new(std::io::sink()));
    assert_eq!(dialogs.pick_save("a.md", &FileFilter::markdown()), None);
    assert_eq!(dialogs.pick_open(&FileFilter::markdown()), None, "end of input cancels");
}

/// Dialogs answering from a queue.
struct Scripted(RefCell<VecDeque<Option<PathBuf>>>);

impl PathDialogs for Scripted {
    fn pick_open(&self, _filters: &FileFilter) -> Option<PathBuf> {
        self.0.borrow_mut().pop_front().flatten()
    }

    fn pick_save(&self, _default_name: &str, _filters: &FileFilter) -> Option<PathBuf> {
        self.0.borrow_mut().pop_front().flatten()
    }
}

#[test]
fn bridge_forwards_dialog_answers() {
    let dir = tempfile::tempdir().expect("tempdir");
    let answers = VecDeque::from([Some(PathBuf::from("/a.md")), None]);
    let b = NativeBridge::new(
        Box::new(Scripted(RefCell::new(answers))),
        Vec::new(),
        dir.path().to_path_buf(),
    );
    assert_eq!(b.pick_open_path(&FileFilter::markdown()), Some(PathBuf::from("/a.md")));
    assert_eq!(b.pick_save_path("a.md", &FileFilter::markdown()), None);
}
