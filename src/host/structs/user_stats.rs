use serde::{Deserialize, Serialize};
use crate::host::enums::stats_source::StatsSource;

/// Number of shared files and folders the host reported for a user.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserStats {
    pub files: u64,
    pub folders: u64,
    #[serde(default)]
    pub source: StatsSource,
}
