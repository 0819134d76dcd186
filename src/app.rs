//! Process start: pick the Host Bridge for the mode, then run the shell.

use std::io;
use std::path::PathBuf;

use mdstudio_core::bridge::sandbox::SandboxBridge;
use mdstudio_core::config::Preferences;
use mdstudio_core::paths::is_markdown_file;
use mdstudio_core::{BridgeMode, HostBridge};

use crate::native::dialogs::{ConsoleDialogs, PathDialogs};
use crate::native::NativeBridge;
use crate::shell::Shell;

pub struct Launch {
    pub prefs: Preferences,
    pub prefs_path: Option<PathBuf>,
    /// Raw command-line file arguments.
    pub files: Vec<String>,
}

/// Keep only `.md` / `.markdown` arguments as pending open paths.
pub fn startup_files<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    args.into_iter()
        .map(Into::into)
        .filter(|arg| is_markdown_file(arg))
        .collect()
}

#[cfg(target_os = "macos")]
fn native_dialogs() -> Box<dyn PathDialogs> {
    match crate::native::appkit::AppKitDialogs::new() {
        Some(dialogs) => Box::new(dialogs),
        None => Box::new(ConsoleDialogs::stdio()),
    }
}

#[cfg(not(target_os = "macos"))]
fn native_dialogs() -> Box<dyn PathDialogs> {
    Box::new(ConsoleDialogs::stdio())
}

pub fn run(launch: Launch) -> io::Result<()> {
    let Launch { prefs, prefs_path, files } = launch;
    let download_dir = prefs.resolved_download_dir();
    let pending = startup_files(files);

    match prefs.mode {
        BridgeMode::Native => {
            tracing::info!(pending = pending.len(), "starting in native mode");
            let bridge = NativeBridge::new(native_dialogs(), pending, download_dir);
            run_shell(bridge, prefs, prefs_path)
        }
        BridgeMode::Sandboxed => {
            if !pending.is_empty() {
                tracing::info!(ignored = pending.len(), "sandboxed mode has no startup files");
            }
            tracing::info!(download_dir = %download_dir.display(), "starting in sandboxed mode");
            run_shell(SandboxBridge::new(download_dir), prefs, prefs_path)
        }
    }
}

fn run_shell<B: HostBridge>(
    bridge: B,
    prefs: Preferences,
    prefs_path: Option<PathBuf>,
) -> io::Result<()> {
    let mut shell = Shell::new(bridge, prefs, prefs_path);
    shell.activate();
    let mut input = io::stdin();
    let mut out = io::stdout();
    shell.run(&mut input, &mut out)
}
