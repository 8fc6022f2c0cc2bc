use crate::model::Document;

mod permalink;

pub use permalink::PermalinkAssigner;

/// Routing: decides where each document is published.
///
/// Runs after discovery and before the slug index is built; the index is only
/// as good as the URLs assigned here.
pub trait UrlAssigner: Send + Sync {
    fn id(&self) -> &'static str;

    /// Output URLs for `document`, canonical first. An empty result means the
    /// document is not published.
    fn assign(&self, document: &Document) -> Vec<String>;
}
