//! Command-line interface for fid-umd.
//!
//! The tool takes a list of JavaScript files, updates each one's UMD wrapper
//! in place, and reports the files it could not update.
//!
//! # Usage
//!
//! ```bash
//! # Wrap or refresh files in place
//! fid-umd lib/widget.js lib/helpers.js
//!
//! # Filter standard input to standard output
//! cat widget.js | fid-umd - > widget.umd.js
//!
//! # Show debug logs on stderr
//! fid-umd --verbose lib/*.js
//! ```
//!
//! # Exit Status
//!
//! - `0` when every file was updated, or when no files were given
//! - `1` when at least one file failed (for example an invalid JSON marker)
//!
//! A failing file is reported and left untouched; the remaining files are
//! still processed.
//!
//! # Configuration
//!
//! Flags are translated into a [`CliConfig`] first and applied once at the
//! start of execution. Tests build a [`CliConfig`] directly and call
//! [`Cli::execute_with_config`].

mod update;


pub use update::{RunSummary, UpdateRun};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = "\
If there are any files that have invalid JSON in their \"fid-umd\" markers,
they will not be updated and this program will have a failure status code.";

/// Runtime settings derived from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Default log filter for the stderr subscriber.
    ///
    /// `None` disables logging. When `RUST_LOG` is set it takes precedence
    /// over this value.
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Create a configuration with logging disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default log filter.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Filter the stderr subscriber would be installed with.
    #[must_use]
    pub fn log_filter(&self) -> Option<EnvFilter> {
        let level = self.log_level.as_deref()?;
        Some(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
    }

    /// Install the stderr log subscriber.
    ///
    /// Standard output is reserved for `-` results. Does nothing when a
    /// global subscriber is already installed.
    pub fn init_logging(&self) {
        let Some(filter) = self.log_filter() else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Update or add UMD to JavaScript files.
#[derive(Parser, Debug)]
#[command(
    name = "fid-umd",
    about = "Update or add UMD to JavaScript files",
    version,
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Files to update in place; `-` reads stdin and writes stdout
    #[arg(value_name = "FILENAME")]
    files: Vec<String>,

    /// Enable debug logging on stderr
    ///
    /// Equivalent to `RUST_LOG=debug`. Mutually exclusive with `--quiet`.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Disable logging; only per-file failures are reported
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Run with settings derived from the parsed flags.
    ///
    /// # Errors
    ///
    /// Only fails when writing to stdout fails in a way that leaves no
    /// per-file report possible. Individual file failures are collected in
    /// the returned [`RunSummary`].
    pub async fn execute(self) -> Result<RunSummary> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translate flags into a [`CliConfig`].
    ///
    /// - `--verbose`: `debug`
    /// - `--quiet`: no logging
    /// - default: `info`
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("info".to_string())
        };

        CliConfig {
            log_level,
        }
    }

    /// Run with an explicit configuration.
    ///
    /// # Errors
    ///
    /// See [`Cli::execute`].
    pub async fn execute_with_config(self, config: CliConfig) -> Result<RunSummary> {
        config.init_logging();
        UpdateRun::new().run(&self.files).await
    }
}
