use mdstudio_core::render::highlighter::{has_theme, highlight, DEFAULT_THEME};

#[test]
fn highlights_rust_code() {
    let result = highlight("fn main() {}", "rust", DEFAULT_THEME);
    assert!(!result.spans.is_empty(), "should produce highlight spans for Rust");
}

#[test]
fn unknown_language_falls_back_gracefully() {
    let result = highlight("some code", "foobar_no_such_lang", DEFAULT_THEME);
    assert_eq!(result.spans.len(), 1, "unknown language: single unstyled span");
}

#[test]
fn markdown_source_gets_multiple_spans() {
    let result = highlight("# Title\n\nSome **bold** text\n", "md", DEFAULT_THEME);
    assert!(result.spans.len() > 1, "Markdown should produce multiple spans");
}

#[test]
fn spans_cover_the_whole_input() {
    let code = "def foo():\n    pass\n";
    let result = highlight(code, "python", DEFAULT_THEME);
    assert_eq!(result.spans.first().map(|s| s.range.0), Some(0));
    assert_eq!(result.spans.last().map(|s| s.range.1), Some(code.len()));
}

#[test]
fn unknown_theme_falls_back_to_default() {
    assert!(!has_theme("no-such-theme"));
    let result = highlight("fn main() {}", "rust", "no-such-theme");
    assert!(!result.spans.is_empty());
}

#[test]
fn empty_code_returns_no_spans() {
    let result = highlight("", "rust", DEFAULT_THEME);
    assert!(result.spans.is_empty(), "empty code should yield no spans");
}
