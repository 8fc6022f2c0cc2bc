use pulldown_cmark::{html, Options, Parser};

use crate::model::Document;

/// Turns a fully rewritten document into an HTML body.
pub trait Renderer: Send + Sync {
    fn render(&self, document: &Document) -> String;
}

/// CommonMark renderer. Anchors produced by the link pass are inline HTML and
/// pass through untouched.
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        Self { options }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, document: &Document) -> String {
        let parser = Parser::new_ext(&document.content, self.options);
        let mut out = String::with_capacity(document.content.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}
