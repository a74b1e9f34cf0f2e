//! Data structures for leecher tracking.

/// The tracker instance owning settings, status map and statistics.
pub mod leecher_tracker;
