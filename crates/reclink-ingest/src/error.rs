use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("data folder not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        source: io::Error,
    },

    #[error("read {path}: {source}")]
    Csv {
        path: PathBuf,
        source: csv::Error,
    },

    #[error("read mapping profile {path}: {source}")]
    ProfileRead {
        path: PathBuf,
        source: io::Error,
    },

    #[error("parse mapping profile {path}: {source}")]
    ProfileParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
