use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Custom error types for the image-similarity library
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A file could not be opened or decoded as an image
    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Directory traversal error
    #[error("Directory traversal error: {0}")]
    Traversal(#[from] walkdir::Error),

    /// File not found error
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Invalid configuration error
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl Error {
    /// Wrap an image error with the path of the file that produced it
    pub fn decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Error::Decode {
            path: path.into(),
            source,
        }
    }
}
