use mdstudio_core::document::SAMPLE_MARKDOWN;
use mdstudio_core::render::highlighter::DEFAULT_THEME;
use mdstudio_core::render::preview::to_html;
use mdstudio_core::render::{render, View, ViewMode};

#[test]
fn preview_renders_headings_and_emphasis() {
    let html = to_html("# Title\n\nsome **bold** text");
    assert!(html.contains("<h1>Title</h1>"), "got: {html}");
    assert!(html.contains("<strong>bold</strong>"), "got: {html}");
}

#[test]
fn preview_renders_gfm_tables() {
    let html = to_html("| A | B |\n|---|---|\n| 1 | 2 |\n");
    assert!(html.contains("<table>"), "got: {html}");
}

#[test]
fn preview_renders_strikethrough() {
    let html = to_html("~~gone~~");
    assert!(html.contains("<del>gone</del>"), "got: {html}");
}

#[test]
fn preview_keeps_code_block_language() {
    let html = to_html("```rust\nfn main() {}\n```\n");
    assert!(html.contains("language-rust"), "got: {html}");
}

#[test]
fn preview_does_not_pass_raw_html_through() {
    let html = to_html("<script>alert(1)</script>");
    assert!(!html.contains("<script>"), "got: {html}");
}

#[test]
fn source_view_keeps_text_verbatim() {
    match render(SAMPLE_MARKDOWN, ViewMode::Source, DEFAULT_THEME) {
        View::Source { text, spans } => {
            assert_eq!(text, SAMPLE_MARKDOWN);
            assert!(!spans.is_empty());
        }
        View::Preview { .. } => panic!("expected source view"),
    }
}

#[test]
fn preview_view_of_sample_has_table() {
    match render(SAMPLE_MARKDOWN, ViewMode::Preview, DEFAULT_THEME) {
        View::Preview { html } => assert!(html.contains("<table>")),
        View::Source { .. } => panic!("expected preview"),
    }
}

#[test]
fn view_mode_toggles() {
    assert_eq!(ViewMode::Source.toggled(), ViewMode::Preview);
    assert_eq!(ViewMode::Preview.toggled(), ViewMode::Source);
    assert_eq!(ViewMode::default(), ViewMode::Preview);
}
