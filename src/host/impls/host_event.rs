use std::io::BufRead;
use crate::host::enums::host_event::HostEvent;
use crate::host::enums::replay_error::ReplayError;
use crate::host::enums::stats_source::StatsSource;
use crate::host::structs::user_stats::UserStats;

impl HostEvent {
    pub fn upload_queued(user: &str) -> HostEvent {
        HostEvent::UploadQueued { user: user.to_string() }
    }

    pub fn user_stats(user: &str, files: u64, folders: u64, source: StatsSource) -> HostEvent {
        HostEvent::UserStats { user: user.to_string(), files, folders, source }
    }

    pub fn upload_finished(user: &str) -> HostEvent {
        HostEvent::UploadFinished { user: user.to_string() }
    }

    pub fn user(&self) -> &str {
        match self {
            HostEvent::UploadQueued { user } => user,
            HostEvent::UserStats { user, .. } => user,
            HostEvent::UploadFinished { user } => user,
        }
    }

    pub fn stats(&self) -> Option<UserStats> {
        match self {
            HostEvent::UserStats { files, folders, source, .. } => Some(UserStats {
                files: *files,
                folders: *folders,
                source: *source,
            }),
            _ => None,
        }
    }

    /// Parses a JSON-lines event script.
    ///
    /// Blank lines and lines starting with `#` are skipped. Line numbers in
    /// errors are 1-based.
    pub fn parse_script<R: BufRead>(reader: R) -> Result<Vec<HostEvent>, ReplayError> {
        let mut events = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let event = serde_json::from_str(trimmed)
                .map_err(|source| ReplayError::EventError { line: index + 1, source })?;
            events.push(event);
        }
        Ok(events)
    }
}
