use std::collections::BTreeSet;
use crate::host::enums::host_action::HostAction;

/// A [`PluginHost`](crate::host::traits::plugin_host::PluginHost) without a
/// network behind it.
///
/// Every outbound call is logged and appended to `actions` in call order, so
/// a replayed session can be inspected afterwards. Buddies and watched users
/// are fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct ReplayHost {
    pub buddies: BTreeSet<String>,
    pub watched: BTreeSet<String>,
    pub actions: Vec<HostAction>,
    pub log_lines: Vec<String>,
}
