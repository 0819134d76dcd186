use comrak::{markdown_to_html, Options};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// GitHub-flavoured extensions: tables, strikethrough, autolinks, task lists.
fn make_options() -> Options<'static> {
    let mut opts = Options::default();
    opts.extension.strikethrough = true;
    opts.extension.table = true;
    opts.extension.autolink = true;
    opts.extension.tasklist = true;
    opts.extension.footnotes = true;
    opts
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render Markdown to HTML. Raw HTML in the source is not passed through.
pub fn to_html(source: &str) -> String {
    markdown_to_html(source, &make_options())
}
