//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resolve note links and backlinks in a markdown vault
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root; sources, assets and the config file are relative to it
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Config file name, relative to the root
    #[arg(short = 'C', long, default_value = "vaultlink.yaml", global = true)]
    pub config: PathBuf,

    /// Log link resolution details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Rewrite every document and write the rendered site
    Build {
        /// Output directory (relative to the root); overrides `output_dir`
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the backlink graph as JSON
    Links,
}
