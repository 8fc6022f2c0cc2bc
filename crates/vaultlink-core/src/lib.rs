//! Vaultlink Core Library
//!
//! Resolves wiki-style and short-slug markdown references across a corpus of
//! notes and derives backlinks. Text transforms are pure; file access goes
//! through the [`vfs::FileSystem`] seam.
//!

pub mod backlinks;
pub mod collection;
mod config;
pub mod corpus;
mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod rewrite;
pub mod routing;
pub mod slug_index;
pub mod syntax;
pub mod utils;
pub mod vfs;

pub use backlinks::{backlinks_for, BacklinkSource};
pub use collection::{Collection, CollectionItem};
pub use config::{AssetsConfig, SiteConfig, SourceConfig};
pub use corpus::{Corpus, RewrittenCorpus, RoutedCorpus};
pub use error::{Error, Result};
pub use model::{Backlink, Document, LinkKind, LinkToken};
pub use render::{MarkdownRenderer, Renderer};
pub use rewrite::{rewrite_images, rewrite_links};
pub use routing::{PermalinkAssigner, UrlAssigner};
pub use slug_index::{SlugIndex, SlugIndexBuilder};
pub use utils::{file_slug, to_slash_path};
pub use vfs::{FileSystem, PhysicalFileSystem};
