//! Writes the rendered site to disk.

use anyhow::{ensure, Context, Result};
use rayon::prelude::*;
use std::path::{Component, Path, PathBuf};
use vaultlink_core::{
    Collection, Corpus, FileSystem, MarkdownRenderer, PermalinkAssigner, SiteConfig,
};

use crate::page::render_page;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
    pub assets: usize,
}

/// Runs the whole pipeline for the project at `root`.
pub fn collect_site(config: &SiteConfig, root: &Path, fs: &dyn FileSystem) -> Collection {
    Corpus::discover(config, root, fs)
        .route(&PermalinkAssigner)
        .rewrite()
        .render(&MarkdownRenderer::new())
}

/// Renders every page with its backlinks into `output` and copies the assets.
pub fn build_site(
    config: &SiteConfig,
    root: &Path,
    output: &Path,
    fs: &dyn FileSystem,
) -> Result<BuildSummary> {
    let collection = collect_site(config, root, fs);

    let (pages_result, assets_result) = rayon::join(
        || write_pages(&collection, output, fs),
        || copy_assets(config, root, output, fs),
    );
    let summary = BuildSummary {
        pages: pages_result?,
        assets: assets_result?,
    };

    log::info!(
        "wrote {} pages and {} assets to {}",
        summary.pages,
        summary.assets,
        output.display()
    );
    Ok(summary)
}

fn write_pages(collection: &Collection, output: &Path, fs: &dyn FileSystem) -> Result<usize> {
    let pages = collection.backlink_map();
    pages.par_iter().try_for_each(|(item, backlinks)| {
        let path = page_path(output, &item.url)?;
        fs.write(&path, render_page(item, backlinks).as_bytes())
            .with_context(|| format!("Failed to write {}", path.display()))
    })?;
    Ok(pages.len())
}

/// `/a/b/` is written to `a/b/index.html`; a URL naming an `.html` file is
/// written as is.
fn page_path(output: &Path, url: &str) -> Result<PathBuf> {
    let relative = Path::new(url.trim_start_matches('/'));
    ensure!(
        relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir)),
        "URL `{}` escapes the output directory",
        url
    );

    if url.ends_with(".html") {
        Ok(output.join(relative))
    } else {
        Ok(output.join(relative).join("index.html"))
    }
}

fn copy_assets(
    config: &SiteConfig,
    root: &Path,
    output: &Path,
    fs: &dyn FileSystem,
) -> Result<usize> {
    let source = root.join(&config.assets.source);
    let target = output.join(config.assets.url.trim_start_matches('/'));
    let files = fs.list_files(&source, &[]);

    files.par_iter().try_for_each(|path| {
        let Ok(relative) = path.strip_prefix(&source) else {
            return Ok(());
        };
        let bytes = fs
            .read(path)
            .with_context(|| format!("Failed to read asset {}", path.display()))?;
        let dest = target.join(relative);
        fs.write(&dest, &bytes)
            .with_context(|| format!("Failed to copy asset to {}", dest.display()))
    })?;

    Ok(files.len())
}
