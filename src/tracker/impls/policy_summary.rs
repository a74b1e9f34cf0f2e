use crate::config::structs::leecher_settings::LeecherSettings;
use crate::tracker::enums::policy_summary::PolicySummary;

impl PolicySummary {
    /// Rows are keyed on (warning message set, ban zero files, ban message set).
    pub fn from_settings(settings: &LeecherSettings) -> PolicySummary {
        match (settings.has_warning_message(), settings.ban_zero_files, settings.has_ban_message()) {
            (false, false, _) => PolicySummary::LogOnly,
            (false, true, _) => PolicySummary::BanOnly,
            (true, false, _) => PolicySummary::Warn,
            (true, true, false) => PolicySummary::WarnAndBanSilently,
            (true, true, true) => PolicySummary::WarnAndBan,
        }
    }

    pub fn log_lines(&self, settings: &LeecherSettings) -> Vec<String> {
        let ready = format!(
            "Ready to warn users that share less than {} files in {} shared public folders.",
            settings.min_files,
            settings.min_folders
        );
        match self {
            PolicySummary::LogOnly => vec![
                String::from("No warning message configured and turbo leechers will not be banned. Leechers will only be logged."),
            ],
            PolicySummary::BanOnly => vec![
                String::from("No warning message configured, leechers will only be logged."),
                String::from("Turbo leechers will be banned."),
            ],
            PolicySummary::Warn => vec![
                ready,
                String::from("Turbo leechers will be warned but will not be banned."),
            ],
            PolicySummary::WarnAndBanSilently => vec![
                ready,
                String::from("No ban message configured, turbo leechers will be banned without a ban message."),
            ],
            PolicySummary::WarnAndBan => vec![
                ready,
                String::from("Turbo leechers will be warned and banned."),
            ],
        }
    }
}
