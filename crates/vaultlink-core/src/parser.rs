use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Where a document asked to be published.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Permalink {
    /// No override, the URL is derived from the source path
    #[default]
    Derived,
    /// `permalink: /some/url/`
    Explicit(String),
    /// `permalink: false`
    Disabled,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub permalink: Permalink,
}

/// Split a source file into its front matter and the body that follows it.
///
/// The body is what the rest of the pipeline treats as the document's raw text.
/// A YAML block that fails to parse is dropped (logged) but still removed from
/// the body.
pub fn split_front_matter(text: &str) -> (FrontMatter, &str) {
    let mut front_matter = FrontMatter::default();

    let body = match front_matter_bounds(text) {
        Some((yaml, body_start)) => {
            match serde_yaml::from_str::<serde_json::Value>(&text[yaml]) {
                Ok(json) => {
                    if let Some(t) = json.get("title").and_then(|v| v.as_str()) {
                        front_matter.title = Some(t.to_string());
                    }
                    front_matter.permalink = match json.get("permalink") {
                        Some(serde_json::Value::String(url)) => Permalink::Explicit(url.clone()),
                        Some(serde_json::Value::Bool(false)) => Permalink::Disabled,
                        _ => Permalink::Derived,
                    };
                }
                Err(e) => log::warn!("ignoring malformed front matter: {}", e),
            }
            &text[body_start..]
        }
        None => text,
    };

    if front_matter.title.is_none() {
        front_matter.title = first_heading(body);
    }

    (front_matter, body)
}

/// Returns the byte range of the YAML between the `---` fences and the offset
/// where the body starts.
fn front_matter_bounds(text: &str) -> Option<(Range<usize>, usize)> {
    let first_line_end = text.find('\n')?;
    if text[..first_line_end].trim_end() != "---" {
        return None;
    }

    let yaml_start = first_line_end + 1;
    let mut pos = yaml_start;
    loop {
        let line_end = text[pos..].find('\n').map(|i| pos + i);
        let line = &text[pos..line_end.unwrap_or(text.len())];
        if line.trim_end() == "---" {
            let body_start = line_end.map_or(text.len(), |end| end + 1);
            return Some((yaml_start..pos, body_start));
        }
        pos = line_end? + 1;
    }
}

fn first_heading(body: &str) -> Option<String> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut pending: Option<String> = None;
    for event in Parser::new_ext(body, options) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => pending = Some(String::new()),
            Event::Text(text) | Event::Code(text) => {
                if let Some(heading) = pending.as_mut() {
                    heading.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                if let Some(heading) = pending.take() {
                    let trimmed = heading.trim();
                    if !trimmed.is_empty() {
                        return Some(trimmed.to_string());
                    }
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_front_matter() {
        let content = "---\ntitle: My Note\ntags: [a, b]\n---\n# Heading\n\nBody";
        let (fm, body) = split_front_matter(content);

        assert_eq!(fm.title.as_deref(), Some("My Note"));
        assert_eq!(fm.permalink, Permalink::Derived);
        assert_eq!(body, "# Heading\n\nBody");
    }

    #[test]
    fn test_title_falls_back_to_first_h1() {
        let (fm, body) = split_front_matter("intro\n\n## Sub\n\n# The *Title*\n");
        assert_eq!(fm.title.as_deref(), Some("The Title"));
        assert_eq!(body, "intro\n\n## Sub\n\n# The *Title*\n");
    }

    #[test]
    fn test_permalink_variants() {
        let (fm, _) = split_front_matter("---\npermalink: /about/\n---\n");
        assert_eq!(fm.permalink, Permalink::Explicit("/about/".to_string()));

        let (fm, body) = split_front_matter("---\npermalink: false\n---");
        assert_eq!(fm.permalink, Permalink::Disabled);
        assert_eq!(body, "");
    }

    #[test]
    fn test_unterminated_front_matter_is_body() {
        let content = "---\ntitle: nope\nno closing fence";
        let (fm, body) = split_front_matter(content);
        assert!(fm.title.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_malformed_yaml_is_stripped() {
        let (fm, body) = split_front_matter("---\ntitle: [unclosed\n---\ntext");
        assert!(fm.title.is_none());
        assert_eq!(fm.permalink, Permalink::Derived);
        assert_eq!(body, "text");
    }
}
