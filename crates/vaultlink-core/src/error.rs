use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error when accessing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config parsing error")]
    Yaml(#[from] serde_yaml::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
