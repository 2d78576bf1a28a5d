//! Temporary project directory for file-level tests

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fixtures::SourceFixture;

/// Temporary directory that is removed when dropped
pub struct TestProject {
    pub temp_dir: TempDir,
}

impl TestProject {
    /// Create an empty project directory
    pub fn new() -> Result<Self> {
        super::init_test_logging(None);

        let temp_dir = TempDir::new().context("Failed to create temp dir")?;
        Ok(Self {
            temp_dir,
        })
    }

    /// Root of the project
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file relative to the project root
    pub fn write(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.path().join(name);
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Write a fixture under its own name
    pub fn write_fixture(&self, fixture: &SourceFixture) -> Result<PathBuf> {
        self.write(&fixture.name, &fixture.content)
    }

    /// Read a file relative to the project root
    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.path().join(name);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }
}
