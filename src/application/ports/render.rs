// src/application/ports/render.rs

/// Renders article Markdown into HTML for the page templates.
pub trait MarkdownRenderer: Send + Sync {
    fn render_html(&self, markdown: &str) -> String;
}
