//! Interactive console shell for MD Studio.
//!
//! The command table mirrors a File / Edit / View menu. Every command maps
//! onto one controller or coordinator call; the shell itself keeps no
//! document state.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use mdstudio_core::config::Preferences;
use mdstudio_core::notice::{self, Notice};
use mdstudio_core::paths::{is_accepted_file, normalize_path};
use mdstudio_core::render::{self, highlighter::HighlightSpan, View, ViewMode};
use mdstudio_core::{
    BridgeMode, DocumentController, FileBlob, HostBridge, IngestOutcome, IngestionCoordinator,
    SaveOutcome,
};

use crate::console::LineSource;

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// (usage, description) pairs printed by `help`.
const COMMANDS: &[(&str, &str)] = &[
    ("open", "Open a file through the open dialog (native mode)"),
    ("import <file>", "Import a file's contents (not bound to its path)"),
    ("drop <file>", "Drop a .md / .markdown / .txt file"),
    ("save", "Save (asks for a destination the first time)"),
    ("saveas", "Save under a new name"),
    ("edit", "Replace the text; finish with a line containing only '.'"),
    ("append <text>", "Append one line to the text"),
    ("view [source|preview]", "Switch or toggle the view"),
    ("show", "Print the document in the current view"),
    ("status", "Show name, path and save state"),
    ("help", "List commands"),
    ("quit", "Leave the shell"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open,
    Import(String),
    Drop(String),
    Save,
    SaveAs,
    Edit,
    Append(String),
    View(Option<ViewMode>),
    Show,
    Status,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let needs_arg = |cmd: fn(String) -> Command| {
            if rest.is_empty() {
                Err(format!("`{word}` needs an argument"))
            } else {
                Ok(cmd(rest.to_string()))
            }
        };
        match word {
            "open" | "o" => Ok(Command::Open),
            "import" => needs_arg(Command::Import),
            "drop" => needs_arg(Command::Drop),
            "save" | "s" => Ok(Command::Save),
            "saveas" => Ok(Command::SaveAs),
            "edit" | "e" => Ok(Command::Edit),
            "append" | "a" => Ok(Command::Append(rest.to_string())),
            "view" | "v" => match rest {
                "" => Ok(Command::View(None)),
                "source" | "edit" => Ok(Command::View(Some(ViewMode::Source))),
                "preview" => Ok(Command::View(Some(ViewMode::Preview))),
                other => Err(format!("unknown view `{other}`")),
            },
            "show" | "p" => Ok(Command::Show),
            "status" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            "" => Err("empty command".to_string()),
            other => Err(format!("unknown command `{other}` (try `help`)")),
        }
    }
}

// ---------------------------------------------------------------------------
// Shell
// ---------------------------------------------------------------------------

pub struct Shell<B: HostBridge> {
    controller: DocumentController<B>,
    coordinator: IngestionCoordinator,
    prefs: Preferences,
    prefs_path: Option<PathBuf>,
}

impl<B: HostBridge> Shell<B> {
    pub fn new(bridge: B, prefs: Preferences, prefs_path: Option<PathBuf>) -> Self {
        Self {
            controller: DocumentController::new(bridge),
            coordinator: IngestionCoordinator::new(),
            prefs,
            prefs_path,
        }
    }

    pub fn controller(&self) -> &DocumentController<B> {
        &self.controller
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    /// Load the first startup file, if the file association passed any.
    pub fn activate(&mut self) -> IngestOutcome {
        self.coordinator.activate(&mut self.controller)
    }

    /// Read commands until `quit` or end of input.
    pub fn run<L: LineSource, W: Write>(&mut self, input: &mut L, out: &mut W) -> io::Result<()> {
        writeln!(out, "MD Studio — type `help` for commands")?;
        writeln!(out, "{}", self.status_line())?;
        loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = input.next_line()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }
            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command, input, out)?,
                Err(message) => writeln!(out, "{message}")?,
            }
        }
        if self.controller.is_dirty() {
            writeln!(
                out,
                "Unsaved changes in {} were discarded.",
                self.controller.document().display_name()
            )?;
        }
        self.coordinator.tear_down();
        Ok(())
    }

    pub fn execute<L: LineSource, W: Write>(
        &mut self,
        command: Command,
        input: &mut L,
        out: &mut W,
    ) -> io::Result<()> {
        match command {
            Command::Open => {
                if self.controller.bridge().mode() == BridgeMode::Sandboxed {
                    writeln!(out, "`open` is not available in sandboxed mode; use `import <file>`.")?;
                    return Ok(());
                }
                self.coordinator.open_dialog(&mut self.controller);
            }
            Command::Import(path) => {
                if let Some(blob) = self.read_blob(&path) {
                    self.coordinator.import_file(&mut self.controller, blob);
                }
            }
            Command::Drop(path) => {
                // Unsupported drops leave no trace, not even a read error.
                if !is_accepted_file(&path) {
                    tracing::debug!(path = %path, "drop ignored");
                    return Ok(());
                }
                if let Some(blob) = self.read_blob(&path) {
                    self.coordinator.drop_file(&mut self.controller, blob);
                }
            }
            Command::Save => {
                let outcome = self.controller.save();
                self.report_save(outcome, out)?;
            }
            Command::SaveAs => {
                let outcome = self.controller.save_as();
                self.report_save(outcome, out)?;
            }
            Command::Edit => {
                let text = read_block(input)?;
                self.controller.edit(text);
            }
            Command::Append(text) => {
                let mut content = self.controller.document().content().to_string();
                if !content.is_empty() && !content.ends_with('\n') {
                    content.push('\n');
                }
                content.push_str(&text);
                content.push('\n');
                self.controller.edit(content);
            }
            Command::View(mode) => {
                self.prefs.view = mode.unwrap_or_else(|| self.prefs.view.toggled());
                self.persist_preferences();
                writeln!(out, "View: {:?}", self.prefs.view)?;
                return Ok(());
            }
            Command::Show => {
                let view = render::render(
                    self.controller.document().content(),
                    self.prefs.view,
                    &self.prefs.theme,
                );
                writeln!(out, "{}", format_view(&view))?;
                return Ok(());
            }
            Command::Status => {}
            Command::Help => {
                for (usage, description) in COMMANDS {
                    writeln!(out, "  {usage:<24}{description}")?;
                }
                return Ok(());
            }
            Command::Quit => return Ok(()),
        }
        writeln!(out, "{}", self.status_line())
    }

    /// Tab label, path label, notice and a `[save]` marker when saving is possible.
    pub fn status_line(&self) -> String {
        let doc = self.controller.document();
        let mut line = format!("{} — {}", doc.tab_label(), doc.path_label());
        if let Some(notice) = self.controller.notice() {
            let _ = write!(line, " | {notice}");
        }
        if self.controller.can_persist() {
            line.push_str(" [save]");
        }
        line
    }

    /// The file-picker side of import/drop: the file's bytes become a blob.
    fn read_blob(&mut self, raw: &str) -> Option<FileBlob> {
        let path = normalize_path(raw);
        match fs::read(&path) {
            Ok(bytes) => Some(FileBlob::new(path.to_string_lossy(), bytes)),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "picker could not read file");
                self.controller.set_notice(Notice::error(notice::OPEN_FAILED));
                None
            }
        }
    }

    fn report_save<W: Write>(&self, outcome: SaveOutcome, out: &mut W) -> io::Result<()> {
        match outcome {
            SaveOutcome::Saved(path) => writeln!(out, "Wrote {}", path.display()),
            SaveOutcome::Downloaded => {
                writeln!(out, "Downloaded {}", self.controller.document().display_name())
            }
            SaveOutcome::Cancelled | SaveOutcome::Failed => Ok(()),
        }
    }

    fn persist_preferences(&self) {
        let Some(path) = &self.prefs_path else {
            return;
        };
        if let Err(err) = self.prefs.save_to(path) {
            tracing::warn!(error = %err, "could not save preferences");
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Lines up to a lone `.` (or end of input), each newline-terminated.
fn read_block<L: LineSource>(input: &mut L) -> io::Result<String> {
    let mut text = String::new();
    while let Some(line) = input.next_line()? {
        if line == "." {
            break;
        }
        text.push_str(&line);
        text.push('\n');
    }
    Ok(text)
}

pub fn format_view(view: &View) -> String {
    match view {
        View::Source { text, spans } => colorize(text, spans),
        View::Preview { html } => html.clone(),
    }
}

/// 24-bit ANSI colouring of `text` by highlight spans.
pub fn colorize(text: &str, spans: &[HighlightSpan]) -> String {
    if spans.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() * 2);
    let mut last = 0;
    for span in spans {
        let (start, end) = span.range;
        let (Some(gap), Some(piece)) = (text.get(last..start), text.get(start..end)) else {
            continue;
        };
        out.push_str(gap);
        let (r, g, b) = span.color;
        let _ = write!(out, "\x1b[38;2;{r};{g};{b}m{piece}");
        last = end;
    }
    out.push_str("\x1b[0m");
    if let Some(tail) = text.get(last..) {
        out.push_str(tail);
    }
    out
}
