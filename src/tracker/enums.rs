//! Enumerations for tracker state and decisions.

/// Per-user tracking status.
///
/// - `RequestingStats` - Upload queued, waiting for stats
/// - `RequestingShares` - Server reported nothing, waiting for the peer's answer
/// - `Okay` - Shares enough, or a buddy
/// - `PendingLeecher` - Shares too little, handled after the transfer
/// - `PendingTurboleecher` - Shares zero files, handled after the transfer
/// - `ProcessedLeecher` - Already warned or banned
pub mod user_status;

/// Outcome of classifying an insufficient user.
pub mod leecher_verdict;

/// Behaviour summary derived from the settings at load time.
pub mod policy_summary;
