use std::collections::HashSet;
use std::path::Path;

use crate::config::SiteConfig;
use crate::model::Document;
use crate::utils::to_slash_path;
use crate::vfs::FileSystem;

#[derive(Debug, Default, Clone)]
pub struct DiscoveryStats {
    pub listed_files: usize,
    pub ignored: usize,
    pub unreadable: usize,
}

/// Walks every source in configuration order and loads its documents.
///
/// The order of the returned documents is the registration order of the
/// slug index, so it has to be stable for a given tree.
pub(super) fn discover_documents(
    config: &SiteConfig,
    root: &Path,
    fs: &dyn FileSystem,
) -> (Vec<Document>, DiscoveryStats) {
    let mut stats = DiscoveryStats::default();
    let mut documents = Vec::new();
    let mut seen = HashSet::new();

    for source in &config.sources {
        let source_root = root.join(&source.path);
        let files = fs.list_files(&source_root, &config.extensions);
        stats.listed_files += files.len();

        for path in files {
            let Ok(project_relative) = path.strip_prefix(root) else {
                continue;
            };
            if is_excluded(config, project_relative) {
                stats.ignored += 1;
                continue;
            }

            let source_path = to_slash_path(project_relative);
            if !seen.insert(source_path.clone()) {
                log::debug!("{} already discovered through another source", source_path);
                continue;
            }

            let text = match fs.read_to_string(&path) {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("skipping unreadable document {}: {}", path.display(), e);
                    stats.unreadable += 1;
                    continue;
                }
            };

            let relative = path
                .strip_prefix(&source_root)
                .map(to_slash_path)
                .unwrap_or_else(|_| source_path.clone());

            documents.push(Document::new(source_path, &text).with_source(&source.name, relative));
        }
    }

    (documents, stats)
}

fn is_excluded(config: &SiteConfig, project_relative: &Path) -> bool {
    project_relative.starts_with(&config.assets.source)
        || config
            .ignore
            .iter()
            .any(|prefix| project_relative.starts_with(prefix))
}
