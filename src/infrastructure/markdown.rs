// src/infrastructure/markdown.rs
use crate::application::ports::render::MarkdownRenderer;
use pulldown_cmark::{Options, Parser, html};

/// pulldown-cmark renderer with tables enabled; fenced code blocks are part
/// of the CommonMark core.
#[derive(Default, Clone)]
pub struct CmarkRenderer;

impl MarkdownRenderer for CmarkRenderer {
    fn render_html(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES);
        let mut out = String::with_capacity(markdown.len() * 2);
        html::push_html(&mut out, parser);
        out
    }
}
