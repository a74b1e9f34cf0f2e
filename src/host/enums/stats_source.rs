use serde::{Deserialize, Serialize};

/// Where a stats update came from.
///
/// Some clients report their share counts to the directory server only once
/// at startup, so a `Server` update may be stale. A `Peer` update is the
/// peer's own answer to a share request and is authoritative.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StatsSource {
    #[default]
    Server,
    Peer,
}
