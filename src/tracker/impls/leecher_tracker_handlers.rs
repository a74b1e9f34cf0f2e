use crate::host::structs::user_stats::UserStats;
use crate::host::traits::plugin_host::PluginHost;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::user_status::UserStatus;
use crate::tracker::structs::leecher_tracker::LeecherTracker;

impl LeecherTracker {
    /// Starts tracking a user the first time one of their uploads is queued.
    ///
    /// A user the host does not watch yet gets watched for this transfer and
    /// the server pushes their stats on its own. A watched user has already
    /// had that push, possibly long ago, so their stats are requested again.
    #[tracing::instrument(level = "debug", skip(self, host))]
    pub fn upload_queued_notification<H: PluginHost>(&mut self, host: &mut H, user: &str)
    {
        if self.probed_users.contains_key(user) {
            return;
        }

        self.probed_users.insert(user.to_string(), UserStatus::RequestingStats);
        self.stats.update_stats(StatsEvent::UsersProbed, 1);

        if !host.is_watched(user) {
            return;
        }

        host.request_user_stats(user);
    }

    #[tracing::instrument(level = "debug", skip(self, host))]
    pub fn user_stats_notification<H: PluginHost>(&mut self, host: &mut H, user: &str, stats: &UserStats)
    {
        self.check_user(host, user, stats.files, stats.folders, stats.source);
    }

    /// Warns, bans or logs a pending leecher once their transfer is done.
    #[tracing::instrument(level = "debug", skip(self, host))]
    pub fn upload_finished_notification<H: PluginHost>(&mut self, host: &mut H, user: &str)
    {
        let status = match self.status(user) {
            Some(status) if status.is_pending() => status,
            _ => return,
        };

        let mut banned = false;
        if status == UserStatus::PendingTurboleecher && self.settings.ban_zero_files {
            if self.settings.has_ban_message() {
                let lines = self.settings.render_ban_message();
                self.send_lines(host, user, &lines);
                self.ban(host, user);
                self.set_status(user, UserStatus::ProcessedLeecher);
                self.settings.add_detected_leecher(user);
                host.log(&format!("Turbo leecher {user} is now banned. Message sent."));
                return;
            }

            self.ban(host, user);
            host.log(&format!("Turbo leecher {user} is now banned."));
            banned = true;
        }

        self.set_status(user, UserStatus::ProcessedLeecher);

        if !self.settings.has_warning_message() {
            if banned {
                self.settings.add_detected_leecher(user);
            }
            host.log(&format!("Leecher {user} doesn't share enough files. No message is specified in plugin settings."));
            return;
        }

        // A turbo leecher banned without a ban message still gets the warning.
        let lines = self.settings.render_warning_message();
        self.send_lines(host, user, &lines);
        self.settings.add_detected_leecher(user);
        host.log(&format!("Leecher {user} doesn't share enough files. Message sent."));
    }

    fn send_lines<H: PluginHost>(&mut self, host: &mut H, user: &str, lines: &[String])
    {
        for line in lines {
            host.send_private(user, line, self.settings.open_private_chat, false);
            self.stats.update_stats(StatsEvent::MessagesSent, 1);
        }
    }

    fn ban<H: PluginHost>(&mut self, host: &mut H, user: &str)
    {
        host.ban_user(user);
        self.stats.update_stats(StatsEvent::UsersBanned, 1);
    }
}
