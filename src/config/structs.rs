//! Configuration data structures.
//!
//! Each struct corresponds to a section of the TOML configuration file, or to
//! metadata describing one.

/// Root configuration structure.
pub mod configuration;

/// Typed plugin settings (thresholds, templates, detected leechers).
pub mod leecher_settings;

/// Description of a single plugin setting for host settings forms.
pub mod setting_descriptor;
