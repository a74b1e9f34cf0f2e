use log::info;

/// Operations a host application provides to the tracker.
///
/// All outbound calls are fire-and-forget: the host performs any network
/// work asynchronously and reports results back through the tracker's
/// notification handlers. Implementations must not call back into the
/// tracker from inside these methods.
#[cfg_attr(test, mockall::automock)]
pub trait PluginHost {
    /// Asks for the user's current share statistics. The answer arrives
    /// later as a stats notification.
    fn request_user_stats(&mut self, user: &str);

    /// Asks the peer itself for its share listing. The answer arrives later
    /// as a peer-sourced stats notification.
    fn request_user_shares(&mut self, user: &str);

    fn send_private(&mut self, user: &str, message: &str, show_ui: bool, switch_page: bool);

    /// Adds the user to the host's ban list.
    fn ban_user(&mut self, user: &str);

    fn is_buddy(&self, user: &str) -> bool;

    /// Whether the host already watches the user and therefore has received
    /// their stats push in the past.
    fn is_watched(&self, user: &str) -> bool;

    fn log(&mut self, message: &str)
    {
        info!(target: "leecher_tracker", "{message}");
    }
}
