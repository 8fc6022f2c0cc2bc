//! Sequences one build run.
//!
//! Each phase consumes the previous one, so the slug index is always complete
//! before a link is resolved and every document is rewritten exactly once.
//!
//! ```text
//! Corpus --route--> RoutedCorpus --rewrite--> RewrittenCorpus --render--> Collection
//! ```

mod discovery;


pub use discovery::DiscoveryStats;

use rayon::prelude::*;
use std::path::Path;

use crate::collection::Collection;
use crate::config::SiteConfig;
use crate::model::Document;
use crate::render::Renderer;
use crate::rewrite::{rewrite_images, rewrite_links};
use crate::routing::UrlAssigner;
use crate::slug_index::{SlugIndex, SlugIndexBuilder};
use crate::vfs::FileSystem;

/// Discovered documents, no URLs yet.
#[derive(Debug)]
pub struct Corpus {
    assets_url: String,
    documents: Vec<Document>,
}

impl Corpus {
    pub fn discover(config: &SiteConfig, root: &Path, fs: &dyn FileSystem) -> Self {
        let (documents, stats) = discovery::discover_documents(config, root, fs);
        log::info!(
            "discovered {} documents ({} listed, {} ignored, {} unreadable)",
            documents.len(),
            stats.listed_files,
            stats.ignored,
            stats.unreadable
        );
        Self::from_documents(&config.assets.url, documents)
    }

    /// Builds a corpus from documents already in memory, in the given order.
    pub fn from_documents(assets_url: impl Into<String>, documents: Vec<Document>) -> Self {
        Self {
            assets_url: assets_url.into(),
            documents,
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Assigns output URLs and builds the slug index from every document,
    /// published or not.
    pub fn route(mut self, assigner: &dyn UrlAssigner) -> RoutedCorpus {
        let mut builder = SlugIndexBuilder::new();
        let mut unpublished = 0;

        for doc in &mut self.documents {
            doc.output_urls = assigner.assign(doc);
            if doc.output_urls.is_empty() {
                unpublished += 1;
            }
            builder.register(doc.source_path.clone(), doc.output_urls.clone());
        }

        let index = builder.freeze();
        log::info!(
            "routed {} documents with `{}` ({} unpublished)",
            self.documents.len(),
            assigner.id(),
            unpublished
        );

        RoutedCorpus {
            assets_url: self.assets_url,
            documents: self.documents,
            index,
        }
    }
}

/// Every document has its URLs and the slug index is frozen.
#[derive(Debug)]
pub struct RoutedCorpus {
    assets_url: String,
    documents: Vec<Document>,
    index: SlugIndex,
}

impl RoutedCorpus {
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn index(&self) -> &SlugIndex {
        &self.index
    }

    /// Image pass then link pass over each document's working text.
    pub fn rewrite(mut self) -> RewrittenCorpus {
        let assets_url = self.assets_url.as_str();
        let index = &self.index;

        let changed: usize = self
            .documents
            .par_iter_mut()
            .map(|doc| {
                let with_images = rewrite_images(&doc.content, assets_url);
                let rewritten = rewrite_links(&with_images, index);
                let changed = rewritten != doc.content;
                doc.content = rewritten;
                usize::from(changed)
            })
            .sum();

        log::info!("rewrote {} of {} documents", changed, self.documents.len());

        RewrittenCorpus {
            documents: self.documents,
            index: self.index,
        }
    }
}

/// Rewriting is done; ready to hand to a renderer.
#[derive(Debug)]
pub struct RewrittenCorpus {
    documents: Vec<Document>,
    index: SlugIndex,
}

impl RewrittenCorpus {
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn index(&self) -> &SlugIndex {
        &self.index
    }

    pub fn render(self, renderer: &dyn Renderer) -> Collection {
        let collection = Collection::from_documents(&self.documents, renderer);
        log::info!("rendered {} pages", collection.len());
        collection
    }
}
