//! File system helpers for the command line tool.
//!
//! - [`atomic`] - Replace a file's content without partial writes
//! - [`read`] - Read source text

pub mod atomic;
pub mod read;

pub use atomic::{atomic_write, safe_write};
pub use read::read_text_file;
