use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::sync::Arc;

use crate::parser::FrontMatter;
use crate::utils::file_slug;

/// A single input unit of the corpus.
///
/// `raw_text` is captured once at discovery and never changes, so backlink
/// scanning always sees the pre-rewrite source. `content` is the working copy
/// the rewrite passes operate on.
#[derive(Debug, Clone)]
pub struct Document {
    /// Project-relative path with `/` separators, unique for the run
    pub source_path: String,
    /// Name of the configured source this document was discovered in
    pub source: String,
    /// Path relative to that source's root
    pub relative_path: String,
    /// Short name other documents mention this one by
    pub file_slug: String,
    /// Output locations; the first one is canonical
    pub output_urls: Vec<String>,
    pub raw_text: Arc<str>,
    pub content: String,
    pub front_matter: FrontMatter,
}

impl Document {
    /// A document outside any named source; its path doubles as the
    /// source-relative path.
    pub fn new(source_path: impl Into<String>, text: &str) -> Self {
        let source_path = source_path.into();
        let (front_matter, body) = crate::parser::split_front_matter(text);
        let raw_text: Arc<str> = Arc::from(body);
        Self {
            file_slug: file_slug(&source_path),
            relative_path: source_path.clone(),
            source_path,
            source: String::new(),
            output_urls: Vec::new(),
            content: raw_text.to_string(),
            raw_text,
            front_matter,
        }
    }

    pub fn with_source(
        mut self,
        source: impl Into<String>,
        relative_path: impl Into<String>,
    ) -> Self {
        self.source = source.into();
        self.relative_path = relative_path.into();
        self.file_slug = file_slug(&self.relative_path);
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.front_matter.title.as_deref()
    }

    pub fn canonical_url(&self) -> Option<&str> {
        self.output_urls.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkKind {
    WikiLink,      // [[target]] / [[target | text]]
    MarkdownLink,  // [text](target)
    WikiImage,     // ![[target]] / ![[target | alt]]
    MarkdownImage, // ![alt](target)
}

/// One recognised occurrence of shorthand syntax.
///
/// `span` is a byte range into the scanned text and covers the whole token,
/// including a leading `!` for images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkToken<'a> {
    pub kind: LinkKind,
    pub target: &'a str,
    /// Display text for links, alt text for images. `None` when absent or empty.
    pub label: Option<&'a str>,
    pub span: Range<usize>,
}

impl<'a> LinkToken<'a> {
    /// The visible text a resolved link shows.
    pub fn display(&self) -> &'a str {
        self.label.unwrap_or(self.target)
    }
}

/// "The document at `url` references the one being asked about."
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backlink {
    pub url: String,
    pub title: Option<String>,
}
