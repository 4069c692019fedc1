//! Pointer file storage
//!
//! The sync engine only talks to storage through `PointerStore`, so tests
//! can swap in failing or in-memory stores.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Storage backend for pointer files
pub trait PointerStore {
    /// Whether a pointer file exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Write a pointer file whose entire content is `url`,
    /// creating parent directories as needed
    fn write_pointer(&self, path: &Path, url: &str) -> Result<()>;
}

impl<T: PointerStore + ?Sized> PointerStore for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn write_pointer(&self, path: &Path, url: &str) -> Result<()> {
        (**self).write_pointer(path, url)
    }
}

/// Pointer files on the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPointerStore;

impl FsPointerStore {
    pub fn new() -> Self {
        Self
    }
}

impl PointerStore for FsPointerStore {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn write_pointer(&self, path: &Path, url: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        fs::write(path, url.as_bytes())
            .with_context(|| format!("Failed to write pointer file {:?}", path))?;

        Ok(())
    }
}
