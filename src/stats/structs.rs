//! Statistics data structures.

/// Counters of the current session.
pub mod tracker_stats;
