use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackerStats {
    pub users_probed: u64,
    pub shares_requested: u64,
    pub users_accepted: u64,
    pub buddies_exempted: u64,
    pub leechers_detected: u64,
    pub turbo_leechers_detected: u64,
    pub messages_sent: u64,
    pub users_banned: u64,
}
