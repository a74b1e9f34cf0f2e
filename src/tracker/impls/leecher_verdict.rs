use crate::config::structs::leecher_settings::LeecherSettings;
use crate::tracker::enums::leecher_verdict::LeecherVerdict;
use crate::tracker::enums::user_status::UserStatus;

impl LeecherVerdict {
    /// Classifies a user that failed the thresholds.
    ///
    /// Rows are keyed on (shares files, warning message set, ban zero files,
    /// ban message set).
    pub fn classify(files: u64, settings: &LeecherSettings) -> LeecherVerdict {
        match (files > 0, settings.has_warning_message(), settings.ban_zero_files, settings.has_ban_message()) {
            (true, true, _, _) => LeecherVerdict::Warn,
            (true, false, _, _) => LeecherVerdict::Log,
            (false, _, true, true) => LeecherVerdict::WarnAndBan,
            (false, _, true, false) => LeecherVerdict::Ban,
            (false, true, false, _) => LeecherVerdict::WarnTurbo,
            (false, false, false, _) => LeecherVerdict::LogTurbo,
        }
    }

    pub fn status(&self) -> UserStatus {
        match self {
            LeecherVerdict::Warn | LeecherVerdict::Log => UserStatus::PendingLeecher,
            LeecherVerdict::WarnAndBan
            | LeecherVerdict::Ban
            | LeecherVerdict::WarnTurbo
            | LeecherVerdict::LogTurbo => UserStatus::PendingTurboleecher,
        }
    }

    pub fn is_turbo(&self) -> bool {
        self.status() == UserStatus::PendingTurboleecher
    }

    pub fn describe(&self, user: &str, files: u64, folders: u64) -> String {
        match self {
            LeecherVerdict::Warn => format!(
                "Leecher detected, {user} is only sharing {files} files in {folders} folders. Going to warn them after transfer"
            ),
            LeecherVerdict::Log => format!(
                "Leecher detected, {user} is only sharing {files} files in {folders} folders. Going to log them after transfer"
            ),
            LeecherVerdict::WarnAndBan => format!(
                "Turbo leecher detected, {user} is very naughty, let's warn and ban them after transfer"
            ),
            LeecherVerdict::Ban => format!(
                "Turbo leecher detected, {user} is very naughty, let's ban them after transfer"
            ),
            LeecherVerdict::WarnTurbo => format!(
                "Turbo leecher detected, {user} is very naughty and will be warned after transfer"
            ),
            LeecherVerdict::LogTurbo => format!(
                "Turbo leecher detected, {user} is very naughty and will be logged after transfer"
            ),
        }
    }
}
