//! Per-file update loop.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::{debug, info};

use crate::constants::STDIN_FILENAME;
use crate::core::{UmdError, user_friendly_error};
use crate::updater::update;
use crate::utils::fs::{read_text_file, safe_write};

/// Outcome of one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries written back successfully
    pub updated: Vec<String>,
    /// Entries that could not be updated, in command line order
    pub failed: Vec<String>,
}

impl RunSummary {
    /// `true` when no entry failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Process exit status for this outcome.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.is_success())
    }
}

/// Updates the files named on the command line, one after another.
///
/// Standard input can be consumed once per run.
#[derive(Debug, Default)]
pub struct UpdateRun {
    stdin_read: bool,
}

impl UpdateRun {
    /// Start a run that has not yet touched stdin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update every entry, reporting failures to stderr as they happen.
    ///
    /// An empty list prints usage hints and counts as success.
    ///
    /// # Errors
    ///
    /// This never fails for a single entry; the result type leaves room for
    /// failures of the run itself.
    pub async fn run(&mut self, files: &[String]) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        if files.is_empty() {
            user_friendly_error(UmdError::NoInputFiles.into()).display();
            return Ok(summary);
        }

        for name in files {
            match self.update_entry(name).await {
                Ok(()) => {
                    debug!(file = %name, "Updated");
                    summary.updated.push(name.clone());
                }
                Err(e) => {
                    eprintln!("{} {}", "Unable to update".red(), name);
                    user_friendly_error(e).display();
                    summary.failed.push(name.clone());
                }
            }
        }

        if !summary.is_success() {
            info!(
                updated = summary.updated.len(),
                failed = summary.failed.len(),
                "Finished with failures"
            );
        }

        Ok(summary)
    }

    /// Read, update and write back one entry.
    ///
    /// # Errors
    ///
    /// Fails when the entry cannot be read or written, when stdin was already
    /// consumed, or when its marker holds invalid JSON. The file is left
    /// untouched in every failure case.
    pub async fn update_entry(&mut self, name: &str) -> Result<()> {
        let contents = self.read_entry(name).await?;
        let updated = update(&contents)?;

        if name == STDIN_FILENAME {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(updated.as_bytes()).await.context("Failed to write to stdout")?;
            stdout.flush().await.context("Failed to flush stdout")?;
            return Ok(());
        }

        let path = Path::new(name).to_path_buf();
        tokio::task::spawn_blocking(move || safe_write(&path, &updated))
            .await
            .context("Write task failed")??;
        Ok(())
    }

    async fn read_entry(&mut self, name: &str) -> Result<String> {
        if name != STDIN_FILENAME {
            return read_text_file(Path::new(name)).await;
        }

        if self.stdin_read {
            return Err(UmdError::StdinAlreadyRead.into());
        }
        self.stdin_read = true;

        let mut contents = String::new();
        tokio::io::stdin().read_to_string(&mut contents).await.context("Failed to read from stdin")?;
        Ok(contents)
    }
}
