use std::collections::BTreeMap;
use log::debug;
use crate::config::structs::leecher_settings::LeecherSettings;
use crate::host::enums::host_event::HostEvent;
use crate::host::structs::user_stats::UserStats;
use crate::host::traits::plugin_host::PluginHost;
use crate::stats::structs::tracker_stats::TrackerStats;
use crate::tracker::enums::policy_summary::PolicySummary;
use crate::tracker::enums::user_status::UserStatus;
use crate::tracker::structs::leecher_tracker::LeecherTracker;

impl LeecherTracker {
    pub fn new(settings: LeecherSettings) -> LeecherTracker
    {
        LeecherTracker {
            settings,
            probed_users: BTreeMap::new(),
            stats: TrackerStats::default(),
        }
    }

    /// Applies the threshold minimums and logs which behaviour is active.
    #[tracing::instrument(level = "debug", skip(self, host))]
    pub fn loaded_notification<H: PluginHost>(&mut self, host: &mut H) -> PolicySummary
    {
        self.settings.sanitize();

        let summary = PolicySummary::from_settings(&self.settings);
        for line in summary.log_lines(&self.settings) {
            host.log(&line);
        }
        summary
    }

    /// Ends the session and hands the settings back for persisting,
    /// including the updated detected leechers list.
    #[tracing::instrument(level = "debug", skip(self, host))]
    pub fn unloaded_notification<H: PluginHost>(self, host: &mut H) -> LeecherSettings
    {
        host.log(&format!(
            "Session ended: {} users probed, {} leechers and {} turbo leechers detected, {} messages sent, {} users banned.",
            self.stats.users_probed,
            self.stats.leechers_detected,
            self.stats.turbo_leechers_detected,
            self.stats.messages_sent,
            self.stats.users_banned
        ));
        self.settings
    }

    pub fn dispatch<H: PluginHost>(&mut self, host: &mut H, event: &HostEvent)
    {
        debug!("[DISPATCH] {event:?}");
        match event {
            HostEvent::UploadQueued { user } => self.upload_queued_notification(host, user),
            HostEvent::UserStats { user, files, folders, source } => {
                let stats = UserStats { files: *files, folders: *folders, source: *source };
                self.user_stats_notification(host, user, &stats);
            }
            HostEvent::UploadFinished { user } => self.upload_finished_notification(host, user),
        }
    }

    #[inline]
    pub fn status(&self, user: &str) -> Option<UserStatus>
    {
        self.probed_users.get(user).copied()
    }

    pub fn tracked_users(&self) -> &BTreeMap<String, UserStatus>
    {
        &self.probed_users
    }

    pub fn settings(&self) -> &LeecherSettings
    {
        &self.settings
    }

    pub fn detected_leechers(&self) -> &[String]
    {
        &self.settings.detected_leechers
    }

    pub fn get_stats(&self) -> TrackerStats
    {
        self.stats
    }

    /// Only updates users that are already tracked.
    pub(crate) fn set_status(&mut self, user: &str, status: UserStatus)
    {
        if let Some(current) = self.probed_users.get_mut(user) {
            debug!("[STATUS] {user}: {current} -> {status}");
            *current = status;
        }
    }
}
