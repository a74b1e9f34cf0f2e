//! Statistics event types.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Used with `TrackerStats::update_stats()` to increment the matching counter.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    UsersProbed,
    SharesRequested,
    UsersAccepted,
    BuddiesExempted,
    LeechersDetected,
    TurboLeechersDetected,
    MessagesSent,
    UsersBanned,
}
