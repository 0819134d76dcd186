//! The single open document: current buffer plus persistence metadata.

use std::path::{Path, PathBuf};

/// Display name of the built-in sample document.
pub const SAMPLE_NAME: &str = "sample.md";

/// Display name for a blob whose name has no usable file-name segment.
pub const UNTITLED_NAME: &str = "untitled.md";

/// Content shown at startup before anything has been opened.
pub const SAMPLE_MARKDOWN: &str = r#"# Welcome to MD Studio

This is a **professional** markdown editor that supports all common markdown features.

## Features

- 📄 Open any `.md` file from your computer
- ✏️ Edit markdown with live preview
- 💾 Save your changes back to a file
- ✨ Beautiful syntax highlighting for code blocks
- 📱 Responsive design that works on all devices

## Code Example

```javascript
function greet(name) {
  console.log(`Hello, ${name}!`);
  return { message: "Welcome to MD Studio" };
}

greet("Developer");
```

## Table Support

| Feature | Status |
|---------|--------|
| Headers | ✅ |
| Lists | ✅ |
| Code Blocks | ✅ |
| Tables | ✅ |
| Links | ✅ |

## Links & Images

Check out [GitHub](https://github.com) for more information.

> **Note:** Switch between Edit and Preview modes using the tabs above!

---

*Start editing or open your own markdown file!*
"#;

/// Editable buffer, last-persisted baseline, name and optional path binding.
///
/// `dirty` and `can_persist` are computed on every call and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    content: String,
    baseline: String,
    display_name: String,
    identity: Option<PathBuf>,
}

impl Default for Document {
    fn default() -> Self {
        Self::sample()
    }
}

impl Document {
    /// The startup document: sample text, no identity, clean.
    pub fn sample() -> Self {
        Self::loaded(SAMPLE_MARKDOWN.to_string(), SAMPLE_NAME.to_string(), None)
    }

    /// A freshly loaded document whose baseline equals its content.
    pub fn loaded(content: String, display_name: String, identity: Option<PathBuf>) -> Self {
        Self {
            baseline: content.clone(),
            content,
            display_name,
            identity,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn identity(&self) -> Option<&Path> {
        self.identity.as_deref()
    }

    /// True when the buffer differs from the last load or save.
    pub fn is_dirty(&self) -> bool {
        self.content != self.baseline
    }

    /// Save stays actionable for a never-saved document even when unedited.
    pub fn can_persist(&self) -> bool {
        self.is_dirty() || self.identity.is_none()
    }

    /// Tab label, prefixed with "• " while there are unsaved changes.
    pub fn tab_label(&self) -> String {
        if self.is_dirty() {
            format!("• {}", self.display_name)
        } else {
            self.display_name.clone()
        }
    }

    /// Full path for the status line.
    pub fn path_label(&self) -> String {
        self.identity
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Untitled — not saved".to_string())
    }

    pub(crate) fn set_content(&mut self, text: String) {
        self.content = text;
    }

    /// Record a successful save of the current buffer.
    pub(crate) fn mark_persisted(&mut self) {
        self.baseline = self.content.clone();
    }

    pub(crate) fn bind(&mut self, path: PathBuf, display_name: String) {
        self.identity = Some(path);
        self.display_name = display_name;
    }
}
