use html_escape::{encode_double_quoted_attribute, encode_text};
use vaultlink_core::{Backlink, CollectionItem};

/// Wraps a rendered body into a standalone page with its backlinks.
pub fn render_page(item: &CollectionItem, backlinks: &[Backlink]) -> String {
    let title = item.title.as_deref().unwrap_or(&item.url);

    let mut page = String::with_capacity(item.html.len() + 256);
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{}</title>\n", encode_text(title)));
    page.push_str("</head>\n<body>\n<main>\n");
    page.push_str(&item.html);
    page.push_str("</main>\n");

    if !backlinks.is_empty() {
        page.push_str("<nav class=\"backlinks\">\n<h2>Linked from</h2>\n<ul>\n");
        for backlink in backlinks {
            let text = backlink.title.as_deref().unwrap_or(&backlink.url);
            page.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>\n",
                encode_double_quoted_attribute(&backlink.url),
                encode_text(text)
            ));
        }
        page.push_str("</ul>\n</nav>\n");
    }

    page.push_str("</body>\n</html>\n");
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn item(title: Option<&str>) -> CollectionItem {
        CollectionItem {
            url: "/books/dune/".to_string(),
            title: title.map(str::to_string),
            source_path: "content/public/books/dune.md".to_string(),
            file_slug: "dune".to_string(),
            raw_text: Arc::from("# Dune"),
            html: "<h1>Dune</h1>\n".to_string(),
        }
    }

    #[test]
    fn test_page_without_backlinks() {
        let page = render_page(&item(Some("Dune & Sons")), &[]);
        assert!(page.contains("<title>Dune &amp; Sons</title>"));
        assert!(page.contains("<main>\n<h1>Dune</h1>\n</main>"));
        assert!(!page.contains("backlinks"));
    }

    #[test]
    fn test_page_lists_backlinks() {
        let backlinks = vec![
            Backlink {
                url: "/posts/hello-world/".to_string(),
                title: Some("<Hello>".to_string()),
            },
            Backlink {
                url: "/notes/".to_string(),
                title: None,
            },
        ];
        let page = render_page(&item(None), &backlinks);
        assert!(page.contains("<title>/books/dune/</title>"));
        assert!(page.contains("<li><a href=\"/posts/hello-world/\">&lt;Hello&gt;</a></li>"));
        assert!(page.contains("<li><a href=\"/notes/\">/notes/</a></li>"));
    }
}
