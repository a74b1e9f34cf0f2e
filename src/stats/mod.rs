//! Session statistics module.
//!
//! Counts what the tracker did during the current plugin session: how many
//! users were probed, how many were accepted, how many leechers were found
//! and how many messages and bans were issued.
//!
//! # Example
//!
//! ```rust,ignore
//! use leecher_tracker::stats::enums::stats_event::StatsEvent;
//!
//! let stats = tracker.get_stats();
//! println!("{} leechers detected", stats.leechers_detected);
//! ```

/// Statistics event types.
pub mod enums;

/// Implementation blocks for statistics updates.
pub mod impls;

/// Statistics data structures.
pub mod structs;
