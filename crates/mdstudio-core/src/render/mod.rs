//! Renderer collaborator: `content -> view`, nothing else.
//!
//! Never touches the controller; callers pass the current buffer in and
//! display whatever comes back.

pub mod highlighter;
pub mod preview;

use serde::{Deserialize, Serialize};

use self::highlighter::HighlightSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Raw text with Markdown syntax colouring (the "Edit" tab).
    Source,
    /// Rendered GFM (the "Preview" tab).
    #[default]
    Preview,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Source => ViewMode::Preview,
            ViewMode::Preview => ViewMode::Source,
        }
    }
}

#[derive(Debug, Clone)]
pub enum View {
    Source {
        text: String,
        spans: Vec<HighlightSpan>,
    },
    Preview {
        html: String,
    },
}

/// Render `content` for `mode` using the named syntect theme.
pub fn render(content: &str, mode: ViewMode, theme: &str) -> View {
    match mode {
        ViewMode::Source => View::Source {
            text: content.to_string(),
            spans: highlighter::highlight(content, "md", theme).spans,
        },
        ViewMode::Preview => View::Preview {
            html: preview::to_html(content),
        },
    }
}
