//! Core leecher tracking logic.
//!
//! This module contains the state machine that decides, per user, whether to
//! probe their shares, accept them, or warn/ban them after their upload.
//!
//! # Architecture
//!
//! - `LeecherTracker` owns the settings, the per-user status map and the
//!   session statistics. It is created when the plugin loads and consumed
//!   when it unloads.
//! - The host calls the notification handlers one at a time; every handler
//!   takes `&mut self` and the host as `&mut impl PluginHost`.
//! - Classification of insufficient users and the startup summary are
//!   expressed as decision tables over the configured options.
//!
//! # User status transitions
//!
//! ```text
//! upload queued ──> requesting_stats ──> okay
//!                         │         └──> pending_leecher / pending_turboleecher ──> processed_leecher
//!                         └──> requesting_shares ──> okay
//!                                            └──> pending_leecher / pending_turboleecher
//! ```
//!
//! A detected leecher from a previous session goes straight to
//! `processed_leecher`.
//!
//! # Example
//!
//! ```rust,ignore
//! use leecher_tracker::tracker::structs::leecher_tracker::LeecherTracker;
//!
//! let mut tracker = LeecherTracker::new(settings);
//! tracker.loaded_notification(&mut host);
//! for event in events {
//!     tracker.dispatch(&mut host, &event);
//! }
//! ```

/// Enumerations for user status, classification verdicts and the startup summary.
pub mod enums;

/// Implementation blocks for the tracker and its enums.
pub mod impls;

/// The tracker struct.
pub mod structs;

/// Unit tests for tracker functionality.
pub mod tests;
