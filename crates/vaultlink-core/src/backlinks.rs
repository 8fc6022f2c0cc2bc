//! Reverse references, found by scanning raw text.
//!
//! A document counts as referencing another when its raw, pre-rewrite text
//! contains the other's file slug anywhere. This is plain substring
//! containment: slugs mentioned in prose count, and so do links that failed
//! to resolve. Every query scans the whole collection, so computing backlinks
//! for all `n` documents costs `O(n²)` text scans.

use crate::model::Backlink;

/// What backlink scanning needs to know about a rendered item.
pub trait BacklinkSource {
    fn url(&self) -> &str;
    fn title(&self) -> Option<&str>;
    /// Source text as it was before any rewriting
    fn raw_text(&self) -> &str;
    fn file_slug(&self) -> &str;
}

/// Items in `all` whose raw text mentions `target`'s slug, in `all`'s order.
///
/// `target` itself is excluded by URL, not identity. An empty slug is contained
/// in every text, so every other item is a backlink of it.
pub fn backlinks_for<'a, T>(target: &T, all: impl IntoIterator<Item = &'a T>) -> Vec<Backlink>
where
    T: BacklinkSource + 'a,
{
    let slug = target.file_slug();
    all.into_iter()
        .filter(|item| item.url() != target.url() && item.raw_text().contains(slug))
        .map(|item| Backlink {
            url: item.url().to_string(),
            title: item.title().map(str::to_string),
        })
        .collect()
}
