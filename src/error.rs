use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtmapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot list directory {path}: {source}")]
    ListDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("scan failed under {root}: {source}")]
    Scan {
        root: PathBuf,
        source: walkdir::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExtmapError>;
