use log::debug;
use crate::host::enums::stats_source::StatsSource;
use crate::host::traits::plugin_host::PluginHost;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::leecher_verdict::LeecherVerdict;
use crate::tracker::enums::user_status::UserStatus;
use crate::tracker::structs::leecher_tracker::LeecherTracker;

impl LeecherTracker {
    /// Evaluates reported share counts of a tracked user.
    ///
    /// Accepted users and buddies become `Okay` from any non-final state.
    /// Everyone else is only classified while still in a requesting state,
    /// so a user is dealt with at most once per session.
    pub fn check_user<H: PluginHost>(&mut self, host: &mut H, user: &str, files: u64, folders: u64, source: StatsSource)
    {
        let status = match self.status(user) {
            None => return,
            Some(UserStatus::Okay) => return,
            Some(status) => status,
        };

        if status == UserStatus::RequestingShares && source != StatsSource::Peer {
            debug!("[CHECK] Ignoring {source} stats of {user}, waiting for the peer");
            return;
        }

        let accepted = self.settings.meets_thresholds(files, folders);
        if accepted || host.is_buddy(user) {
            self.settings.remove_detected_leecher(user);
            self.set_status(user, UserStatus::Okay);

            if accepted {
                self.stats.update_stats(StatsEvent::UsersAccepted, 1);
                host.log(&format!("User {user} is okay, sharing {files} files in {folders} folders."));
            } else {
                self.stats.update_stats(StatsEvent::BuddiesExempted, 1);
                host.log(&format!("Buddy {user} is sharing {files} files in {folders} folders. Not complaining."));
            }
            return;
        }

        if !status.is_requesting() {
            return;
        }

        if self.settings.is_detected_leecher(user) {
            debug!("[CHECK] {user} was already messaged in a previous session");
            self.set_status(user, UserStatus::ProcessedLeecher);
            return;
        }

        // Some clients send their share counts to the server only once at
        // startup, so zero from the server has to be confirmed by the peer.
        if (files == 0 || folders == 0) && status != UserStatus::RequestingShares {
            host.log(&format!("User {user} has no shared files according to the server, requesting shares to verify…"));
            self.set_status(user, UserStatus::RequestingShares);
            self.stats.update_stats(StatsEvent::SharesRequested, 1);
            host.request_user_shares(user);
            return;
        }

        let verdict = LeecherVerdict::classify(files, &self.settings);
        self.set_status(user, verdict.status());
        if verdict.is_turbo() {
            self.stats.update_stats(StatsEvent::TurboLeechersDetected, 1);
        } else {
            self.stats.update_stats(StatsEvent::LeechersDetected, 1);
        }
        host.log(&verdict.describe(user, files, folders));
    }
}
