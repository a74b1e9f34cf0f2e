//! Host-side enumerations.

/// Origin of a stats update (directory server push or peer response).
pub mod stats_source;

/// Serializable host notifications.
pub mod host_event;

/// Outbound host operations recorded by the replay host.
pub mod host_action;

/// Errors raised while reading an event script.
pub mod replay_error;
