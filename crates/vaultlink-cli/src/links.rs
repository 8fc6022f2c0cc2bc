use serde::Serialize;
use vaultlink_core::{Backlink, Collection};

/// One row of the `links` report.
#[derive(Debug, Serialize)]
pub struct PageLinks {
    pub url: String,
    pub title: Option<String>,
    pub backlinks: Vec<Backlink>,
}

pub fn link_graph(collection: &Collection) -> Vec<PageLinks> {
    collection
        .backlink_map()
        .into_iter()
        .map(|(item, backlinks)| PageLinks {
            url: item.url.clone(),
            title: item.title.clone(),
            backlinks,
        })
        .collect()
}
