use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Top-level configuration for a site build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Input roots, scanned in order
    pub sources: Vec<SourceConfig>,
    /// Path prefixes (relative to the project root) never discovered
    #[serde(default)]
    pub ignore: Vec<PathBuf>,
    /// File extensions treated as documents
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    pub assets: AssetsConfig,
    /// Where the binary writes rendered pages
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

/// One input root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Friendly name of the source
    pub name: String,
    /// Directory relative to the project root
    pub path: PathBuf,
}

/// Static assets referenced by image embeds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Directory holding the files, relative to the project root
    pub source: PathBuf,
    /// Site-relative prefix images are rewritten to, e.g. `/assets`
    pub url: String,
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string()]
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("_site")
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            sources: vec![SourceConfig {
                name: "public".to_string(),
                path: PathBuf::from("content/public"),
            }],
            ignore: vec![PathBuf::from("content/private")],
            extensions: default_extensions(),
            assets: AssetsConfig {
                source: PathBuf::from("content/public/_assets"),
                url: "/assets".to_string(),
            },
            output_dir: default_output_dir(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(Error::Io(path.to_path_buf(), e)),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(Error::Validation("at least one source is required".into()));
        }
        if self.extensions.is_empty() {
            return Err(Error::Validation("at least one extension is required".into()));
        }
        if self.assets.url.is_empty() {
            return Err(Error::Validation("assets.url must not be empty".into()));
        }
        Ok(())
    }
}
