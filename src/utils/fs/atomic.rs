//! Atomic file replacement using a temp-and-rename strategy.
//!
//! A wrapped file is either left with its old content or receives the new
//! content in full, never a partial write.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically replaces a text file's content.
///
/// # Examples
///
/// ```rust,no_run
/// use fid_umd::utils::fs::safe_write;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// safe_write(Path::new("widget.js"), "// fid-umd {\"name\":\"Widget\"}\n")?;
/// # Ok(())
/// # }
/// ```
pub fn safe_write(path: &Path, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Atomically writes bytes to a file.
///
/// 1. Write to a temporary file in the target's directory
/// 2. Copy the permissions of the file being replaced, if it exists
/// 3. Sync to disk
/// 4. Rename over the target
///
/// Keeping the temporary file in the same directory keeps the rename on one
/// filesystem.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in: {}", parent.display()))?;

    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .with_context(|| format!("Failed to copy permissions of: {}", path.display()))?;
    }

    temp.write_all(content)
        .with_context(|| format!("Failed to write to temp file: {}", temp.path().display()))?;
    temp.as_file().sync_all().with_context(|| "Failed to sync file to disk")?;

    temp.persist(path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}
