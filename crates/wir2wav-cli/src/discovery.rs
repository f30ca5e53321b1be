//! Input discovery and output naming.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension of input files (matched case-insensitively).
pub const WIR_EXTENSION: &str = "wir";

/// Extension of output files.
pub const WAV_EXTENSION: &str = "wav";

/// Returns true if the path has a `.wir` extension.
pub fn is_wir_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(WIR_EXTENSION))
}

/// Finds `.wir` files under `root`.
///
/// `root` may be a single file, which is returned as-is when it has the
/// right extension. Directory results are sorted so batch order is stable.
/// Unreadable directory entries are skipped.
pub fn find_wir_files(root: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        bail!("Path does not exist: {}", root.display());
    }

    if root.is_file() {
        if !is_wir_path(root) {
            bail!("Not a .wir file: {}", root.display());
        }
        return Ok(vec![root.to_path_buf()]);
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file() && is_wir_path(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    Ok(files)
}

/// Output path for an input: same directory and stem, `.wav` extension.
pub fn wav_path_for(wir_path: &Path) -> PathBuf {
    wir_path.with_extension(WAV_EXTENSION)
}
