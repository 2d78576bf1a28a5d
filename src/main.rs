//! fid-umd CLI entry point
//!
//! Parses arguments, updates every named file, and turns the outcome into
//! the process exit status.

use anyhow::Result;
use clap::Parser;
use fid_umd::cli;
use fid_umd::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(summary) if summary.is_success() => Ok(()),
        Ok(summary) => std::process::exit(summary.exit_code()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
