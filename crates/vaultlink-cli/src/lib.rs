//! Vaultlink command-line front end.
//!
//! Loads the site configuration, drives the core pipeline against a project
//! directory and writes the results.

mod build;
mod cli;
mod links;
mod page;

#[cfg(test)]
mod tests;

pub use build::{build_site, collect_site, BuildSummary};
pub use cli::{Cli, Commands};
pub use links::{link_graph, PageLinks};

use anyhow::{Context, Result};
use std::path::Path;
use vaultlink_core::{PhysicalFileSystem, SiteConfig};

/// Load the config file at `root/config_name`, or defaults when it is absent.
pub fn load_config(root: &Path, config_name: &Path) -> Result<SiteConfig> {
    let config_path = root.join(config_name);
    SiteConfig::load(&config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))
}

pub fn run(cli: &Cli) -> Result<()> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config = load_config(root, &cli.config)?;
    let fs = PhysicalFileSystem;

    match &cli.command {
        Commands::Build { output } => {
            let output = root.join(output.as_ref().unwrap_or(&config.output_dir));
            build_site(&config, root, &output, &fs)?;
        }
        Commands::Links => {
            let collection = collect_site(&config, root, &fs);
            let json = serde_json::to_string_pretty(&link_graph(&collection))
                .context("Failed to serialize link graph")?;
            println!("{}", json);
        }
    }
    Ok(())
}
