#![allow(dead_code)]
use tempfile::TempDir;
use leecher_tracker::config::structs::leecher_settings::LeecherSettings;
use leecher_tracker::host::enums::host_event::HostEvent;
use leecher_tracker::host::enums::stats_source::StatsSource;
use leecher_tracker::host::structs::replay_host::ReplayHost;
use leecher_tracker::tracker::structs::leecher_tracker::LeecherTracker;

pub fn create_test_settings(warning_message: &str, ban_message: &str, ban_zero_files: bool) -> LeecherSettings {
    LeecherSettings {
        warning_message: warning_message.to_string(),
        ban_message: ban_message.to_string(),
        min_files: 100,
        min_folders: 1,
        open_private_chat: true,
        ban_zero_files,
        detected_leechers: Vec::new(),
    }
}

pub fn create_test_tracker(settings: LeecherSettings) -> (LeecherTracker, ReplayHost) {
    let mut tracker = LeecherTracker::new(settings);
    let mut host = ReplayHost::default();
    tracker.loaded_notification(&mut host);
    host.log_lines.clear();
    (tracker, host)
}

pub fn create_test_host(buddies: &[&str], watched: &[&str]) -> ReplayHost {
    ReplayHost::new(
        buddies.iter().map(|user| user.to_string()).collect(),
        watched.iter().map(|user| user.to_string()).collect(),
    )
}

/// Queues an upload for `user` and reports the given counts from `source`.
pub fn queue_and_report(tracker: &mut LeecherTracker, host: &mut ReplayHost, user: &str, files: u64, folders: u64, source: StatsSource) {
    tracker.dispatch(host, &HostEvent::upload_queued(user));
    tracker.dispatch(host, &HostEvent::user_stats(user, files, folders, source));
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}
