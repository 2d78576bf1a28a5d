//! Utilities used by the binary around the pure update logic.

pub mod fs;

pub use fs::{atomic_write, read_text_file, safe_write};
