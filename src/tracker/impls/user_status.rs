use std::fmt;
use std::fmt::Formatter;
use crate::tracker::enums::user_status::UserStatus;

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::RequestingStats => "requesting_stats",
            UserStatus::RequestingShares => "requesting_shares",
            UserStatus::Okay => "okay",
            UserStatus::PendingLeecher => "pending_leecher",
            UserStatus::PendingTurboleecher => "pending_turboleecher",
            UserStatus::ProcessedLeecher => "processed_leecher",
        }
    }

    /// Still waiting for stats or shares, no decision taken yet.
    #[inline]
    pub fn is_requesting(&self) -> bool {
        matches!(self, UserStatus::RequestingStats | UserStatus::RequestingShares)
    }

    /// Classified as a leecher, action due when the transfer finishes.
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, UserStatus::PendingLeecher | UserStatus::PendingTurboleecher)
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
