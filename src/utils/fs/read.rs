//! Reading source text.

use anyhow::{Context, Result};
use std::path::Path;

/// Read a whole UTF-8 file.
pub async fn read_text_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))
}
