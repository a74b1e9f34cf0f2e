//! Host collaborator module.
//!
//! The tracker never talks to the network, the UI or the settings storage
//! directly. Everything it needs from the client application goes through
//! the [`PluginHost`](traits::plugin_host::PluginHost) trait, and everything
//! the client tells it arrives as a notification call.
//!
//! # Contents
//!
//! - `PluginHost` - Outbound operations (stats/share requests, private
//!   messages, bans, buddy and watch queries, log sink)
//! - `UserStats` / `StatsSource` - Share counts reported by the host
//! - `HostEvent` - Serializable notification, used to replay event scripts
//! - `ReplayHost` - A host that logs and records every outbound action
//!
//! # Example
//!
//! ```rust,ignore
//! use leecher_tracker::host::structs::replay_host::ReplayHost;
//!
//! let mut host = ReplayHost::new(vec!["buddy".to_string()], vec![]);
//! tracker.upload_queued_notification(&mut host, "alice");
//! assert!(host.actions.is_empty());
//! ```

/// Host-side enumerations (stats source, events, recorded actions, errors).
pub mod enums;

/// Implementation blocks for host types.
pub mod impls;

/// Host-side data structures.
pub mod structs;

/// The host collaborator trait.
pub mod traits;
