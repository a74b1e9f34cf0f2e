//! Common utilities and shared functionality.
//!
//! This module contains helper functions used across the other modules of
//! the crate.
//!
//! # Utilities
//!
//! - Logging setup
//! - Placeholder substitution for multi-line message templates
//!
//! # Example
//!
//! ```rust,ignore
//! use leecher_tracker::common::common::render_template;
//!
//! let lines = render_template("Share %files% files", &[("%files%", "100".to_string())]);
//! assert_eq!(lines, vec!["Share 100 files".to_string()]);
//! ```

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Unit tests for common utilities.
pub mod tests;
