use serde::{Deserialize, Serialize};

/// Overall behaviour of the tracker for the current settings.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PolicySummary {
    /// No warning message and no banning: leechers are only logged.
    LogOnly,
    /// No warning message, turbo leechers are banned.
    BanOnly,
    /// Leechers are warned, turbo leechers are not banned.
    Warn,
    /// Leechers are warned, turbo leechers are banned without a ban message.
    WarnAndBanSilently,
    /// Leechers are warned, turbo leechers receive the ban message and are banned.
    WarnAndBan,
}
