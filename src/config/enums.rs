//! Configuration enumerations.

/// Errors raised while loading, saving or validating the configuration.
pub mod configuration_error;

/// Value kinds of plugin settings, as presented to the host.
pub mod setting_kind;
