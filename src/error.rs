use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Invalid block size: {size}\nBlock sizes must be positive (1 or larger).")]
    InvalidBlockSize { size: i64 },

    #[error("Invalid offset: {offset}\nThe comparison offset must be non-negative.")]
    InvalidOffset { offset: i64 },

    #[error("Invalid size: {size}\nThe comparison size must be positive, or -1 for unbounded.")]
    InvalidSize { size: i64 },

    #[error("File '{path}' either does not exist or is not a regular file")]
    NotRegularFile { path: PathBuf },

    #[error("Failed to open {path}\nCause: {source}\nCheck that you have read permissions on the file.")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CompareError>;
