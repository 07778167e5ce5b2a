use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FldistError {
    #[error("File {0} not found.")]
    SourceNotFound(PathBuf),

    #[error("Can't read file {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid source format: {0}. Expected `histogram` or `interval`")]
    InvalidSourceFormat(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, FldistError>;
