//! Core types for fid-umd
//!
//! Currently this is the error system shared by the library and the binary:
//! - [`UmdError`] - Enumerated error types covering every failure mode
//! - [`ErrorContext`] - User-friendly wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to the user-friendly format

pub mod error;

pub use error::{ErrorContext, UmdError, user_friendly_error};
