//! # Leecher Tracker
//!
//! A plugin core for peer-to-peer file-sharing clients that detects peers
//! sharing too few files ("leechers") and warns or bans them once their
//! upload has finished.
//!
//! ## Overview
//!
//! The tracker has no network stack, UI or storage of its own. Everything it
//! needs from the outside world (requesting user statistics, sending private
//! messages, banning, the buddy list) is reached through the [`PluginHost`]
//! trait, and the host drives the tracker by calling its notification
//! handlers one at a time.
//!
//! ## Lifecycle of a user
//!
//! - **Upload queued**: the user becomes tracked as `requesting_stats`
//! - **Stats received**: the user is accepted (`okay`), probed further
//!   (`requesting_shares`) or classified as `pending_leecher` /
//!   `pending_turboleecher`
//! - **Upload finished**: pending leechers are warned, banned or logged and
//!   end up as `processed_leecher`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use leecher_tracker::config::structs::leecher_settings::LeecherSettings;
//! use leecher_tracker::tracker::structs::leecher_tracker::LeecherTracker;
//!
//! let mut tracker = LeecherTracker::new(LeecherSettings::default());
//! tracker.loaded_notification(&mut host);
//! tracker.upload_queued_notification(&mut host, "alice");
//! tracker.user_stats_notification(&mut host, "alice", &stats);
//! tracker.upload_finished_notification(&mut host, "alice");
//! let settings = tracker.unloaded_notification(&mut host);
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup and message template rendering
//! - [`config`] - Typed plugin settings and the TOML configuration file
//! - [`host`] - The host collaborator trait and host-side data types
//! - [`stats`] - Per-session counters
//! - [`structs`] - CLI argument parsing for the replay binary
//! - [`tracker`] - The leecher tracker state machine
//!
//! [`PluginHost`]: host::traits::plugin_host::PluginHost

/// Common utilities and shared functionality.
///
/// Contains the logging setup used by the replay binary and the placeholder
/// substitution used for outgoing messages.
pub mod common;

/// Configuration management module.
///
/// Holds the typed plugin settings, their schema descriptors for host
/// settings forms, and loading/saving of the TOML configuration file.
pub mod config;

/// Host collaborator module.
///
/// Defines the `PluginHost` trait the tracker calls into, the stats the host
/// reports, scripted host events and a replay host for offline sessions.
pub mod host;

/// Session statistics module.
///
/// Counts probes, verdicts, messages and bans issued by the tracker.
pub mod stats;

/// CLI argument parsing for the replay binary.
pub mod structs;

/// Core leecher tracking logic.
///
/// Contains the `LeecherTracker` with its per-user status map, the
/// notification handlers and the classification decision table.
pub mod tracker;
