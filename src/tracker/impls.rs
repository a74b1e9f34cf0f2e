//! Implementation blocks for tracker types.

/// Construction, lifecycle notifications, accessors and event dispatch.
pub mod leecher_tracker;

/// Upload and stats notification handlers.
pub mod leecher_tracker_handlers;

/// Evaluation of reported share counts.
pub mod leecher_tracker_evaluation;

/// Classification decision table.
pub mod leecher_verdict;

/// Startup summary decision table.
pub mod policy_summary;

/// Helpers and `Display` for user status.
pub mod user_status;
