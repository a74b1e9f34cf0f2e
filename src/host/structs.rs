//! Host-side data structures.

/// Share counts reported for a user.
pub mod user_stats;

/// Host that logs and records outbound actions, used for event replay.
pub mod replay_host;
