//! Atomic output writes.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `data` to `path` so that readers see either the old file or the
/// complete new one.
///
/// The bytes go to a temp file in the destination directory, which is then
/// renamed over `path`. On any error the temp file is removed and `path` is
/// left untouched.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    tmp.write_all(data)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("Failed to sync {}", path.display()))?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to move output into place: {}", path.display()))?;

    Ok(())
}
