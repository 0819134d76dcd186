use std::sync::OnceLock;

use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Theme used when the configured one is unknown.
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    /// Byte range within the highlighted text.
    pub range: (usize, usize),
    /// Foreground colour (RGB, 0–255).
    pub color: (u8, u8, u8),
}

pub struct HighlightResult {
    pub spans: Vec<HighlightSpan>,
}

// ---------------------------------------------------------------------------
// Shared syntax / theme sets (loading them is slow)
// ---------------------------------------------------------------------------

fn syntax_set() -> &'static SyntaxSet {
    static SET: OnceLock<SyntaxSet> = OnceLock::new();
    SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme_set() -> &'static ThemeSet {
    static SET: OnceLock<ThemeSet> = OnceLock::new();
    SET.get_or_init(ThemeSet::load_defaults)
}

/// Whether `name` is one of the bundled syntect themes.
pub fn has_theme(name: &str) -> bool {
    theme_set().themes.contains_key(name)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Highlight `code` according to `language` and return coloured spans.
///
/// Falls back to a single unstyled span when the language is unknown.
pub fn highlight(code: &str, language: &str, theme: &str) -> HighlightResult {
    if code.is_empty() {
        return HighlightResult { spans: Vec::new() };
    }

    let ss = syntax_set();
    let ts = theme_set();

    let syntax = ss
        .find_syntax_by_token(language)
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    // Plain text resolved for an explicitly named language → unknown.
    if syntax.name == "Plain Text" && !language.is_empty() {
        return HighlightResult {
            spans: vec![HighlightSpan {
                range: (0, code.len()),
                color: (200, 200, 200),
            }],
        };
    }

    let theme = ts
        .themes
        .get(theme)
        .or_else(|| ts.themes.get(DEFAULT_THEME))
        .or_else(|| ts.themes.values().next());
    let Some(theme) = theme else {
        return HighlightResult { spans: Vec::new() };
    };

    let mut h = HighlightLines::new(syntax, theme);
    let mut spans = Vec::new();
    let mut offset = 0usize;

    for line in LinesWithEndings::from(code) {
        if let Ok(ranges) = h.highlight_line(line, ss) {
            for (style, text) in ranges {
                let c = style.foreground;
                spans.push(HighlightSpan {
                    range: (offset, offset + text.len()),
                    color: (c.r, c.g, c.b),
                });
                offset += text.len();
            }
        } else {
            offset += line.len();
        }
    }

    HighlightResult { spans }
}
