use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;

use crate::backlinks::{backlinks_for, BacklinkSource};
use crate::model::{Backlink, Document};
use crate::render::Renderer;

/// One rendered output location.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionItem {
    pub url: String,
    pub title: Option<String>,
    pub source_path: String,
    pub file_slug: String,
    #[serde(skip)]
    pub raw_text: Arc<str>,
    #[serde(skip)]
    pub html: String,
}

impl BacklinkSource for CollectionItem {
    fn url(&self) -> &str {
        &self.url
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn raw_text(&self) -> &str {
        &self.raw_text
    }

    fn file_slug(&self) -> &str {
        &self.file_slug
    }
}

/// Everything that was rendered in a run, frozen.
///
/// A document with several output URLs contributes one item per URL; a
/// document with none contributes nothing.
#[derive(Debug, Default)]
pub struct Collection {
    items: Vec<CollectionItem>,
}

impl Collection {
    pub fn from_documents(documents: &[Document], renderer: &dyn Renderer) -> Self {
        let rendered: Vec<String> = documents
            .par_iter()
            .map(|doc| {
                if doc.output_urls.is_empty() {
                    String::new()
                } else {
                    renderer.render(doc)
                }
            })
            .collect();

        let items = documents
            .iter()
            .zip(rendered)
            .flat_map(|(doc, html)| {
                doc.output_urls.iter().map(move |url| CollectionItem {
                    url: url.clone(),
                    title: doc.title().map(str::to_string),
                    source_path: doc.source_path.clone(),
                    file_slug: doc.file_slug.clone(),
                    raw_text: Arc::clone(&doc.raw_text),
                    html: html.clone(),
                })
            })
            .collect();

        Self { items }
    }

    pub fn items(&self) -> &[CollectionItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, url: &str) -> Option<&CollectionItem> {
        self.items.iter().find(|item| item.url == url)
    }

    /// The derived "who points at me" field for one item, computed on demand.
    pub fn backlinks_for(&self, item: &CollectionItem) -> Vec<Backlink> {
        backlinks_for(item, &self.items)
    }

    /// Backlinks of every item, computed in parallel, in collection order.
    pub fn backlink_map(&self) -> Vec<(&CollectionItem, Vec<Backlink>)> {
        self.items
            .par_iter()
            .map(|item| (item, self.backlinks_for(item)))
            .collect()
    }
}
