use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    RequestingStats,
    RequestingShares,
    Okay,
    PendingLeecher,
    PendingTurboleecher,
    ProcessedLeecher,
}
