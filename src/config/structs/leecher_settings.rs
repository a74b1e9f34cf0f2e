//! Typed plugin settings.

use serde::{Deserialize, Serialize};

/// Settings of the leecher tracker, persisted by the host.
///
/// Both message templates are multi-line; every line is sent as a separate
/// private message. The placeholders `%files%` and `%folders%` are replaced
/// by [`min_files`](Self::min_files) and [`min_folders`](Self::min_folders)
/// when a message is sent.
///
/// # Empty values
///
/// - An empty `warning_message` means leechers are only logged.
/// - An empty `ban_message` means turbo leechers are banned silently (when
///   `ban_zero_files` is set).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LeecherSettings {
    /// Private message template sent to leechers after their transfer.
    pub warning_message: String,

    /// Private message template sent to turbo leechers before banning them.
    pub ban_message: String,

    /// Minimum number of shared files a user needs.
    pub min_files: u64,

    /// Minimum number of shared folders a user needs (at least 1).
    pub min_folders: u64,

    /// Open a chat tab in the host UI when messaging a leecher.
    pub open_private_chat: bool,

    /// Ban users that share zero files.
    pub ban_zero_files: bool,

    /// Users warned or banned in a previous session, in detection order.
    pub detected_leechers: Vec<String>,
}
