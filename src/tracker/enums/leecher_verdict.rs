use serde::{Deserialize, Serialize};

/// What happens to an insufficient user once their transfer finishes.
///
/// Picked by `LeecherVerdict::classify` from the reported file count and the
/// configured messages and ban flag.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LeecherVerdict {
    /// Shares some files, a warning message is configured.
    Warn,
    /// Shares some files, no warning message.
    Log,
    /// Shares zero files, ban enabled with a ban message.
    WarnAndBan,
    /// Shares zero files, ban enabled without a ban message.
    Ban,
    /// Shares zero files, ban disabled, a warning message is configured.
    WarnTurbo,
    /// Shares zero files, ban disabled, no warning message.
    LogTurbo,
}
