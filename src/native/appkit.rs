//! NSOpenPanel / NSSavePanel dialogs (macOS only).
//!
//! Panels run modally on the main thread; the shell loop is single
//! threaded, so the marker is taken once at construction.

use std::path::PathBuf;

use objc2::rc::Retained;
use objc2_app_kit::{
    NSApplication, NSApplicationActivationPolicy, NSModalResponse, NSOpenPanel, NSSavePanel,
};
use objc2_foundation::{MainThreadMarker, NSArray, NSString};

use mdstudio_core::FileFilter;

use super::dialogs::PathDialogs;

/// `NSModalResponseOK`.
const MODAL_RESPONSE_OK: NSModalResponse = 1;

pub struct AppKitDialogs {
    mtm: MainThreadMarker,
}

impl AppKitDialogs {
    /// `None` off the main thread.
    pub fn new() -> Option<Self> {
        let mtm = MainThreadMarker::new()?;
        // Panels need a running application object; stay out of the Dock.
        let app = NSApplication::sharedApplication(mtm);
        app.setActivationPolicy(NSApplicationActivationPolicy::Accessory);
        Some(Self { mtm })
    }
}

impl PathDialogs for AppKitDialogs {
    fn pick_open(&self, filters: &FileFilter) -> Option<PathBuf> {
        let panel = NSOpenPanel::openPanel(self.mtm);
        panel.setCanChooseFiles(true);
        panel.setCanChooseDirectories(false);
        panel.setAllowsMultipleSelection(false);
        set_allowed_types(&panel, filters);
        run_modal(&panel)
    }

    fn pick_save(&self, default_name: &str, filters: &FileFilter) -> Option<PathBuf> {
        let panel = NSSavePanel::savePanel(self.mtm);
        panel.setNameFieldStringValue(&NSString::from_str(default_name));
        set_allowed_types(&panel, filters);
        run_modal(&panel)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[allow(deprecated, unused_unsafe)]
fn set_allowed_types(panel: &NSSavePanel, filters: &FileFilter) {
    let types: Vec<Retained<NSString>> = filters
        .extensions
        .iter()
        .map(|ext| NSString::from_str(ext))
        .collect();
    let array = NSArray::from_retained_slice(&types);
    unsafe { panel.setAllowedFileTypes(Some(&array)) };
}

#[allow(unused_unsafe)]
fn run_modal(panel: &NSSavePanel) -> Option<PathBuf> {
    let response = unsafe { panel.runModal() };
    if response != MODAL_RESPONSE_OK {
        return None;
    }
    let url = unsafe { panel.URL() }?;
    let path = unsafe { url.path() }?;
    Some(PathBuf::from(path.to_string()))
}
