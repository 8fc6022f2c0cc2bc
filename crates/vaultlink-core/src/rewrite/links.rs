use super::rewrite_two_stage;
use crate::model::{LinkKind, LinkToken};
use crate::slug_index::SlugIndex;

/// Resolve shorthand links against the corpus.
///
/// Resolved links of either form become `<a href="url">text</a>`, where text
/// is the explicit display text or else the raw target. When a target does not
/// resolve, a markdown link is kept byte-for-byte while a wiki link is reduced
/// to its display text with the brackets dropped.
pub fn rewrite_links(raw_text: &str, index: &SlugIndex) -> String {
    rewrite_two_stage(
        raw_text,
        LinkKind::MarkdownLink,
        LinkKind::WikiLink,
        |token| link_markup(token, index),
    )
}

fn link_markup(token: &LinkToken<'_>, index: &SlugIndex) -> Option<String> {
    match resolve(index, token.target) {
        Some(url) => Some(format!("<a href=\"{}\">{}</a>", url, token.display())),
        None if token.kind == LinkKind::WikiLink => Some(token.display().to_string()),
        None => None,
    }
}

fn resolve<'i>(index: &'i SlugIndex, slug: &str) -> Option<&'i str> {
    let mut candidates = index.candidates(slug);
    let Some(first) = candidates.next() else {
        log::debug!("unresolved link target `{}`", slug);
        return None;
    };

    if log::log_enabled!(log::Level::Debug) {
        let others: Vec<&str> = candidates.map(|e| e.source_path.as_str()).collect();
        if !others.is_empty() {
            log::debug!(
                "ambiguous slug `{}` resolved to {} over {:?}",
                slug,
                first.source_path,
                others
            );
        }
    }

    first.output_urls.first().map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slug_index::SlugIndexBuilder;

    fn blog_index() -> SlugIndex {
        let mut builder = SlugIndexBuilder::new();
        builder.register(
            "content/public/posts/hello-world.md",
            vec!["/posts/hello-world/".to_string()],
        );
        builder.register(
            "content/public/books/dune.md",
            vec!["/books/dune/".to_string()],
        );
        builder.freeze()
    }

    #[test]
    fn test_wiki_link_with_display_text() {
        assert_eq!(
            rewrite_links("[[hello-world | Say Hi]]", &blog_index()),
            "<a href=\"/posts/hello-world/\">Say Hi</a>"
        );
    }

    #[test]
    fn test_wiki_link_without_display_text_uses_target() {
        assert_eq!(
            rewrite_links("Read [[dune]].", &blog_index()),
            "Read <a href=\"/books/dune/\">dune</a>."
        );
    }

    #[test]
    fn test_unresolved_wiki_link_degrades_to_text() {
        let index = blog_index();
        assert_eq!(rewrite_links("[[missing-page]]", &index), "missing-page");
        assert_eq!(
            rewrite_links("see [[missing-page|this page]]!", &index),
            "see this page!"
        );
    }

    #[test]
    fn test_markdown_link_resolves() {
        assert_eq!(
            rewrite_links("[my post](hello-world)", &blog_index()),
            "<a href=\"/posts/hello-world/\">my post</a>"
        );
        assert_eq!(
            rewrite_links("[](posts/hello-world)", &blog_index()),
            "<a href=\"/posts/hello-world/\">posts/hello-world</a>"
        );
    }

    #[test]
    fn test_unresolved_markdown_link_is_untouched() {
        let text = "go to [the docs](https://example.com/docs) now";
        assert_eq!(rewrite_links(text, &blog_index()), text);
    }

    #[test]
    fn test_images_are_not_links() {
        let text = "![dune](dune) and ![[dune]]";
        assert_eq!(rewrite_links(text, &blog_index()), text);
    }

    #[test]
    fn test_one_anchor_per_occurrence() {
        let out = rewrite_links(
            "[[dune]] [[dune|again]] [x](dune) [[hello-world]]",
            &blog_index(),
        );
        assert_eq!(out.matches("<a href=").count(), 4);
        assert_eq!(
            out,
            "<a href=\"/books/dune/\">dune</a> <a href=\"/books/dune/\">again</a> \
             <a href=\"/books/dune/\">x</a> <a href=\"/posts/hello-world/\">hello-world</a>"
        );
    }

    #[test]
    fn test_preserved_markdown_span_is_not_rescanned() {
        // The markdown form claims the span first; the wiki stage must not
        // strip the brackets inside its target
        let text = "[text](x[[missing]])";
        assert_eq!(rewrite_links(text, &blog_index()), text);
    }

    #[test]
    fn test_wiki_link_next_to_parens() {
        assert_eq!(
            rewrite_links("[[missing]](nowhere)", &blog_index()),
            "missing(nowhere)"
        );
    }

    #[test]
    fn test_malformed_syntax_passes_through() {
        let text = "[[dune] [dune]( [[ ]] [[]]";
        assert_eq!(rewrite_links(text, &blog_index()), text);
    }

    #[test]
    fn test_empty_index_resolves_nothing() {
        let index = SlugIndexBuilder::new().freeze();
        assert_eq!(
            rewrite_links("[[a]] [b](c)", &index),
            "a [b](c)"
        );
    }
}
