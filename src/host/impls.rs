//! Implementation blocks for host types.

/// Event constructors and event script parsing.
pub mod host_event;

/// `Display` for stats sources.
pub mod stats_source;

/// `PluginHost` implementation and accessors of the replay host.
pub mod replay_host;
