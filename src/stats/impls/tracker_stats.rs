use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::tracker_stats::TrackerStats;

impl TrackerStats {
    pub fn update_stats(&mut self, event: StatsEvent, value: u64) -> TrackerStats
    {
        let counter = match event {
            StatsEvent::UsersProbed => &mut self.users_probed,
            StatsEvent::SharesRequested => &mut self.shares_requested,
            StatsEvent::UsersAccepted => &mut self.users_accepted,
            StatsEvent::BuddiesExempted => &mut self.buddies_exempted,
            StatsEvent::LeechersDetected => &mut self.leechers_detected,
            StatsEvent::TurboLeechersDetected => &mut self.turbo_leechers_detected,
            StatsEvent::MessagesSent => &mut self.messages_sent,
            StatsEvent::UsersBanned => &mut self.users_banned,
        };
        *counter = counter.saturating_add(value);
        *self
    }
}
