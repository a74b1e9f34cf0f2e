use std::collections::BTreeMap;
use crate::config::structs::leecher_settings::LeecherSettings;
use crate::stats::structs::tracker_stats::TrackerStats;
use crate::tracker::enums::user_status::UserStatus;

/// Per-session leecher tracker.
///
/// Holds one status per username seen in an upload-queued notification.
/// Entries are never removed while the plugin is loaded; a status only moves
/// forward, toward `Okay` or `ProcessedLeecher`.
#[derive(Debug, Clone)]
pub struct LeecherTracker {
    pub(crate) settings: LeecherSettings,
    pub(crate) probed_users: BTreeMap<String, UserStatus>,
    pub(crate) stats: TrackerStats,
}
