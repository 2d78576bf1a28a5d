//! Error handling for fid-umd
//!
//! This module provides the error type raised by the UMD generator and the
//! user-friendly reporting used by the command line tool. The error system is
//! designed around two principles:
//! 1. **Strongly-typed errors** for precise handling in library callers
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`UmdError`] - Enumerated failure cases
//! - [`ErrorContext`] - Wrapper that adds suggestions and details for display
//!
//! The library core only ever fails with [`UmdError::MalformedMarker`]; the
//! remaining variants belong to the file handling done by the binary.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fid_umd::core::{UmdError, user_friendly_error};
//!
//! match fid_umd::update("// fid-umd {{}\n") {
//!     Ok(_) => println!("Updated"),
//!     Err(e) => {
//!         let ctx = user_friendly_error(anyhow::Error::from(e));
//!         ctx.display();
//!     }
//! }
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for fid-umd operations
///
/// # Error Categories
///
/// ## Marker Parsing
/// - [`MalformedMarker`] - A configuration marker was found but its JSON is invalid
///
/// ## Input Handling
/// - [`StdinAlreadyRead`] - Standard input was requested more than once
/// - [`NoInputFiles`] - Nothing was passed on the command line
/// - [`IoError`] - Standard I/O errors from [`std::io::Error`]
///
/// [`MalformedMarker`]: UmdError::MalformedMarker
/// [`StdinAlreadyRead`]: UmdError::StdinAlreadyRead
/// [`NoInputFiles`]: UmdError::NoInputFiles
/// [`IoError`]: UmdError::IoError
#[derive(Error, Debug)]
pub enum UmdError {
    /// The configuration marker carries a payload that is not valid JSON
    ///
    /// Raised only when a `// fid-umd {...}` line exists. Text without any
    /// marker is wrapped for the first time and never produces this error.
    ///
    /// # Fields
    /// - `payload`: The raw text captured after the marker token
    /// - `reason`: The JSON parser's description of the problem
    #[error("Invalid JSON: {payload}")]
    MalformedMarker {
        /// The raw, unparsed marker payload
        payload: String,
        /// Why the payload failed to parse
        reason: String,
    },

    /// Standard input can only be consumed once per run
    #[error("Already read from stdin")]
    StdinAlreadyRead,

    /// No files were given on the command line
    #[error("Please pass filenames on the command line")]
    NoInputFiles,

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for UmdError {
    fn clone(&self) -> Self {
        match self {
            Self::MalformedMarker {
                payload,
                reason,
            } => Self::MalformedMarker {
                payload: payload.clone(),
                reason: reason.clone(),
            },
            Self::StdinAlreadyRead => Self::StdinAlreadyRead,
            Self::NoInputFiles => Self::NoInputFiles,
            // io::Error is not Clone; keep its message
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error wrapper with a user-facing suggestion and details
///
/// # Examples
///
/// ```rust,no_run
/// use fid_umd::core::{ErrorContext, UmdError};
///
/// let context = ErrorContext::new(UmdError::StdinAlreadyRead)
///     .with_suggestion("Pass '-' only once per invocation");
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: UmdError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: UmdError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// - Error message: Red and bold
    /// - Details: Yellow
    /// - Suggestion: Green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`]
///
/// The error chain is walked so that a [`UmdError`] wrapped by
/// `anyhow::Context` (for example "Failed to read src/app.js") is still
/// recognized. The outermost message is kept as details in that case.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let mut current: &dyn std::error::Error = error.as_ref();
    loop {
        if let Some(umd_error) = current.downcast_ref::<UmdError>() {
            let context = create_error_context(umd_error.clone());
            let outer = error.to_string();
            if outer == umd_error.to_string() {
                return context;
            }
            return context.with_details(outer);
        }

        if let Some(io_error) = current.downcast_ref::<std::io::Error>() {
            return io_error_context(io_error, &error);
        }

        match current.source() {
            Some(source) => current = source,
            None => break,
        }
    }

    ErrorContext::new(UmdError::Other {
        message: format!("{error:#}"),
    })
}

fn io_error_context(io_error: &std::io::Error, outer: &anyhow::Error) -> ErrorContext {
    let context = ErrorContext::new(UmdError::Other {
        message: outer.to_string(),
    })
    .with_details(io_error.to_string());

    match io_error.kind() {
        std::io::ErrorKind::NotFound => {
            context.with_suggestion("Check that the file exists and the path is correct")
        }
        std::io::ErrorKind::PermissionDenied => {
            context.with_suggestion("Check file permissions for the file and its directory")
        }
        std::io::ErrorKind::InvalidData => {
            context.with_suggestion("Only UTF-8 encoded JavaScript files can be updated")
        }
        _ => context,
    }
}

fn create_error_context(error: UmdError) -> ErrorContext {
    match &error {
        UmdError::MalformedMarker {
            reason,
            ..
        } => {
            let reason = reason.clone();
            ErrorContext::new(error)
                .with_details(reason)
                .with_suggestion("Fix the JSON after '// fid-umd' or delete the marker line to start over")
        }
        UmdError::StdinAlreadyRead => ErrorContext::new(error)
            .with_suggestion("Pass '-' at most once per invocation"),
        UmdError::NoInputFiles => ErrorContext::new(error)
            .with_suggestion("For a list of options, use --help"),
        _ => ErrorContext::new(error),
    }
}
