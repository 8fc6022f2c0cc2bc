use super::UrlAssigner;
use crate::model::Document;
use crate::parser::Permalink;

/// Directory-style URLs derived from the source-relative path, with a
/// front-matter `permalink` taking precedence.
///
/// | relative path | url |
/// |---------------|-----|
/// | `posts/hello-world.md` | `/posts/hello-world/` |
/// | `books/index.md` | `/books/` |
/// | `index.md` | `/` |
pub struct PermalinkAssigner;

impl UrlAssigner for PermalinkAssigner {
    fn id(&self) -> &'static str {
        "permalink"
    }

    fn assign(&self, document: &Document) -> Vec<String> {
        match &document.front_matter.permalink {
            Permalink::Disabled => Vec::new(),
            Permalink::Explicit(permalink) => vec![explicit_url(permalink)],
            Permalink::Derived => vec![derived_url(&document.relative_path)],
        }
    }
}

fn derived_url(relative_path: &str) -> String {
    let without_ext = match relative_path.rsplit_once('.') {
        Some((stem, ext)) if !ext.contains('/') => stem,
        _ => relative_path,
    };

    let mut segments: Vec<&str> = without_ext.split('/').filter(|s| !s.is_empty()).collect();
    if segments.last() == Some(&"index") {
        segments.pop();
    }

    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", segments.join("/"))
    }
}

fn explicit_url(permalink: &str) -> String {
    let trimmed = permalink.strip_suffix("index.html").unwrap_or(permalink);
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
