//! Global constants used throughout the fid-umd codebase.
//!
//! The marker strings here are part of the on-disk format: they are embedded
//! in every wrapped file and must stay byte-stable across releases so that
//! previously wrapped files keep being recognized.

/// Token that identifies every marker comment.
pub const MARKER_TOKEN: &str = "fid-umd";

/// Module name used when the marker does not supply one.
pub const DEFAULT_MODULE_NAME: &str = "Unknown";

/// File name that stands for standard input/output on the command line.
pub const STDIN_FILENAME: &str = "-";

/// Marker line that closes the generated preamble.
pub const PREAMBLE_END_MARKER: &str = "    // fid-umd end\n";

/// Marker line that opens the generated postamble.
pub const POSTAMBLE_START_MARKER: &str = "    // fid-umd post\n";

/// Marker line that closes the generated postamble.
pub const POSTAMBLE_END_MARKER: &str = "// fid-umd post-end\n";
