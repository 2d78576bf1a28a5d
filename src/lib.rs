//! fid-umd - UMD generator for JavaScript modules
//!
//! Wraps a JavaScript module body in a header and footer that register the
//! module's factory with whichever module system is present at runtime:
//! Node.js, CommonJS, AMD, modulejs, YUI, or a plain property on the root
//! object. The wrapper carries its own configuration in a marker comment, so
//! running the tool again regenerates the same wrapper and leaves the body
//! alone.
//!
//! # Managed Layout
//!
//! ```text
//! // fid-umd {"name":"Widget","depends":["A","B"]}
//! (function (name, root, factory) {
//!     ...generated loader chain...
//! }("Widget", this, function (A, B) {
//!     // fid-umd end
//! ...user code, never modified...
//!     // fid-umd post
//! }));
//! // fid-umd post-end
//! ```
//!
//! # Core Modules
//!
//! - [`config`] - Marker configuration and dependency expansion
//! - [`loaders`] - Per-module-system guard and loader fragments
//! - [`generator`] - Preamble and postamble text
//! - [`markers`] - Finding and splicing marker regions
//! - [`updater`] - The detect/update cycle ([`update`])
//!
//! ## Supporting Modules
//!
//! - [`cli`] - Command-line interface
//! - [`core`] - Error types and user-facing error reports
//! - [`utils`] - File helpers used by the binary
//!
//! # Example
//!
//! ```rust
//! let wrapped = fid_umd::update("return {};\n")?;
//! assert!(wrapped.contains("\n    // fid-umd end\nreturn {};\n    // fid-umd post\n"));
//! # Ok::<(), fid_umd::core::UmdError>(())
//! ```

// Core functionality
pub mod config;
pub mod constants;
pub mod generator;
pub mod loaders;
pub mod markers;
pub mod updater;

// Supporting modules
pub mod cli;
pub mod core;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use crate::config::Config;
pub use crate::core::UmdError;
pub use crate::updater::{detect_config, update, update_opt};
