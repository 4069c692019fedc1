use std::path::PathBuf;
use thiserror::Error;

/// The manifest could not be retrieved; fatal for the run
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("manifest file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read manifest file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to download manifest from {url}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("failed to read manifest body from {url}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },
}
