use log::info;
use crate::host::enums::host_action::HostAction;
use crate::host::structs::replay_host::ReplayHost;
use crate::host::traits::plugin_host::PluginHost;

impl ReplayHost {
    pub fn new(buddies: Vec<String>, watched: Vec<String>) -> ReplayHost {
        ReplayHost {
            buddies: buddies.into_iter().collect(),
            watched: watched.into_iter().collect(),
            actions: Vec::new(),
            log_lines: Vec::new(),
        }
    }

    pub fn messages_to(&self, user: &str) -> Vec<String> {
        self.actions.iter().filter_map(|action| match action {
            HostAction::SendPrivate { user: recipient, message, .. } if recipient == user => Some(message.clone()),
            _ => None,
        }).collect()
    }

    pub fn bans_of(&self, user: &str) -> usize {
        self.actions.iter().filter(|action| matches!(action, HostAction::BanUser { user: banned } if banned == user)).count()
    }

    pub fn shares_requests_of(&self, user: &str) -> usize {
        self.actions.iter().filter(|action| matches!(action, HostAction::RequestUserShares { user: requested } if requested == user)).count()
    }

    pub fn stats_requests_of(&self, user: &str) -> usize {
        self.actions.iter().filter(|action| matches!(action, HostAction::RequestUserStats { user: requested } if requested == user)).count()
    }
}

impl PluginHost for ReplayHost {
    fn request_user_stats(&mut self, user: &str) {
        info!("[HOST] Requesting stats of {user}");
        self.actions.push(HostAction::RequestUserStats { user: user.to_string() });
    }

    fn request_user_shares(&mut self, user: &str) {
        info!("[HOST] Requesting shares of {user}");
        self.actions.push(HostAction::RequestUserShares { user: user.to_string() });
    }

    fn send_private(&mut self, user: &str, message: &str, show_ui: bool, switch_page: bool) {
        info!("[HOST] Private message to {user}: {message}");
        self.actions.push(HostAction::SendPrivate {
            user: user.to_string(),
            message: message.to_string(),
            show_ui,
            switch_page,
        });
    }

    fn ban_user(&mut self, user: &str) {
        info!("[HOST] Banning {user}");
        self.actions.push(HostAction::BanUser { user: user.to_string() });
    }

    fn is_buddy(&self, user: &str) -> bool {
        self.buddies.contains(user)
    }

    fn is_watched(&self, user: &str) -> bool {
        self.watched.contains(user)
    }

    fn log(&mut self, message: &str) {
        info!(target: "leecher_tracker", "{message}");
        self.log_lines.push(message.to_string());
    }
}
