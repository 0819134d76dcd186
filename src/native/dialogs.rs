//! Open/save dialogs behind a small trait.
//!
//! macOS uses the AppKit panels (see `appkit`); everywhere else the shell
//! asks for a path on the console.

use std::cell::RefCell;
use std::io::{self, Write};
use std::path::PathBuf;

use mdstudio_core::paths::strip_quotes;
use mdstudio_core::FileFilter;

use crate::console::LineSource;

pub trait PathDialogs {
    /// `None` when the user cancels.
    fn pick_open(&self, filters: &FileFilter) -> Option<PathBuf>;

    /// `None` when the user cancels.
    fn pick_save(&self, default_name: &str, filters: &FileFilter) -> Option<PathBuf>;
}

/// Prompts for a path on the console. An empty answer or end of input
/// cancels.
pub struct ConsoleDialogs {
    input: RefCell<Box<dyn LineSource>>,
    output: RefCell<Box<dyn Write>>,
}

impl ConsoleDialogs {
    pub fn new(input: Box<dyn LineSource>, output: Box<dyn Write>) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    pub fn stdio() -> Self {
        Self::new(Box::new(io::stdin()), Box::new(io::stdout()))
    }

    fn ask(&self, question: &str) -> Option<PathBuf> {
        {
            let mut out = self.output.borrow_mut();
            if write!(out, "{question}").and_then(|_| out.flush()).is_err() {
                return None;
            }
        }
        let answer = match self.input.borrow_mut().next_line() {
            Ok(Some(line)) => line,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(error = %err, "console dialog read failed");
                return None;
            }
        };
        let answer = strip_quotes(answer.trim());
        if answer.is_empty() {
            None
        } else {
            Some(PathBuf::from(answer))
        }
    }
}

fn describe(filters: &FileFilter) -> String {
    let exts: Vec<String> = filters.extensions.iter().map(|e| format!(".{e}")).collect();
    format!("{} ({})", filters.name, exts.join(", "))
}

impl PathDialogs for ConsoleDialogs {
    fn pick_open(&self, filters: &FileFilter) -> Option<PathBuf> {
        self.ask(&format!("Open {} — path (empty to cancel): ", describe(filters)))
    }

    fn pick_save(&self, default_name: &str, filters: &FileFilter) -> Option<PathBuf> {
        self.ask(&format!(
            "Save {} as [{default_name}] — path (empty to cancel): ",
            describe(filters)
        ))
    }
}
