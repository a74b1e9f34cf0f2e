use serde::Serialize;

/// An outbound call the tracker made into the host.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum HostAction {
    RequestUserStats {
        user: String,
    },
    RequestUserShares {
        user: String,
    },
    SendPrivate {
        user: String,
        message: String,
        show_ui: bool,
        switch_page: bool,
    },
    BanUser {
        user: String,
    },
}
