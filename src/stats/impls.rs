//! Implementation blocks for statistics.

/// Counter updates.
pub mod tracker_stats;
