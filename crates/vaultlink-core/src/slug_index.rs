//! Corpus-wide mapping from source paths to output URLs.
//!
//! Construction is two-phase: every document is registered on a
//! [`SlugIndexBuilder`] while the corpus is discovered, then the builder is
//! frozen into a read-only [`SlugIndex`] that the rewrite passes share.
//!
//! Resolution is not an exact key lookup. A slug `s` resolves to the first
//! registered entry whose source path contains `"/" + s`, in registration
//! order. A slug that is a suffix of several paths therefore resolves to
//! whichever was registered first, and changing the discovery order can change
//! that answer.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub source_path: String,
    pub output_urls: Vec<String>,
}

#[derive(Debug, Default)]
pub struct SlugIndexBuilder {
    entries: Vec<IndexEntry>,
    positions: HashMap<String, usize>,
}

impl SlugIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or overwrite the entry for `source_path`.
    ///
    /// Overwriting keeps the entry's original registration position.
    pub fn register(&mut self, source_path: impl Into<String>, output_urls: Vec<String>) {
        let source_path = source_path.into();
        if let Some(&pos) = self.positions.get(&source_path) {
            self.entries[pos].output_urls = output_urls;
            return;
        }

        self.positions.insert(source_path.clone(), self.entries.len());
        self.entries.push(IndexEntry {
            source_path,
            output_urls,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn freeze(self) -> SlugIndex {
        SlugIndex {
            entries: self.entries,
        }
    }
}

/// Frozen, read-only view used during rewriting.
#[derive(Debug, Clone, Default)]
pub struct SlugIndex {
    entries: Vec<IndexEntry>,
}

impl SlugIndex {
    /// Output URLs of the first entry matching `slug`, or `None` when nothing
    /// matches.
    pub fn resolve(&self, slug: &str) -> Option<&[String]> {
        self.candidates(slug)
            .next()
            .map(|entry| entry.output_urls.as_slice())
    }

    /// Canonical URL for `slug`.
    ///
    /// `None` both when no entry matches and when the first match has no
    /// output URL; later matches are never consulted.
    pub fn resolve_url(&self, slug: &str) -> Option<&str> {
        self.resolve(slug)?.first().map(String::as_str)
    }

    /// Every entry matching `slug`, in registration order.
    pub fn candidates<'a>(&'a self, slug: &str) -> impl Iterator<Item = &'a IndexEntry> + 'a {
        let needle = format!("/{}", slug);
        self.entries
            .iter()
            .filter(move |entry| entry.source_path.contains(&needle))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
