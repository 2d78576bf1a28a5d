//! Integration test suite for fid-umd
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **update**: Properties of the library's detect/update cycle
//! - **cli**: The `fid-umd` binary run against real files and stdin

mod cli;
mod update;
