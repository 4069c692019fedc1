//! Manifest retrieval from a local file or an HTTP(S) URL
//!
//! Retrieval is all-or-nothing: any failure aborts the run before parsing.

mod error;
mod http;
mod local;

pub use error::SourceError;
pub use http::{FETCH_TIMEOUT, USER_AGENT};

use std::fmt;
use std::path::PathBuf;

/// Where the manifest text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    File(PathBuf),
    Url(String),
}

impl ManifestSource {
    /// Interpret user input
    ///
    /// A path that exists on disk is a file. Otherwise `http(s)://`
    /// locators are URLs and anything else is treated as a file path,
    /// which fails later as `NotFound`.
    pub fn detect(raw: &str) -> Self {
        let raw = raw.trim();
        let path = PathBuf::from(shellexpand::tilde(raw).as_ref());
        if path.exists() {
            return ManifestSource::File(path);
        }

        let lowered = raw.to_ascii_lowercase();
        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            ManifestSource::Url(raw.to_string())
        } else {
            ManifestSource::File(path)
        }
    }

    /// Retrieve the full manifest text
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn fetch(&self) -> Result<String, SourceError> {
        match self {
            ManifestSource::File(path) => local::read_manifest(path),
            ManifestSource::Url(url) => http::download_manifest(url),
        }
    }
}

impl fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestSource::File(path) => write!(f, "file {}", path.display()),
            ManifestSource::Url(url) => write!(f, "url {}", url),
        }
    }
}
