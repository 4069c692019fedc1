use super::SourceError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a manifest file, replacing invalid UTF-8 sequences
pub(super) fn read_manifest(path: &Path) -> Result<String, SourceError> {
    log::info!("Reading local manifest: {:?}", path);

    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
        _ => SourceError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let text = String::from_utf8_lossy(&bytes).into_owned();
    log::info!("Manifest loaded ({} bytes)", bytes.len());
    Ok(text)
}
