//! Implementation blocks for configuration types.

/// Loading, saving and validating the configuration file.
pub mod configuration;

/// Defaults, clamping, schema and template rendering of plugin settings.
pub mod leecher_settings;
