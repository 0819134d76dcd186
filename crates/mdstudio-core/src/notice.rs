//! Transient status notification shown next to the document.
//!
//! Lives beside the [`crate::document::Document`], not inside it: it has its
//! own lifetime and is cleared by explicit events only.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub tone: Tone,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { tone: Tone::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { tone: Tone::Error, text: text.into() }
    }

    pub fn is_success(&self) -> bool {
        self.tone == Tone::Success
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tone {
            Tone::Success => write!(f, "✓ {}", self.text),
            Tone::Error => write!(f, "✗ {}", self.text),
        }
    }
}

pub const SAVED: &str = "Saved.";
pub const SAVE_FAILED: &str = "Could not save the file.";
pub const OPEN_FAILED: &str = "Could not open the file.";
