use serde::{Deserialize, Serialize};
use crate::host::enums::stats_source::StatsSource;

/// A notification delivered by the host, in serializable form.
///
/// Event scripts are JSON lines, one event per line:
///
/// ```text
/// {"event":"upload_queued","user":"alice"}
/// {"event":"user_stats","user":"alice","files":5,"folders":1,"source":"peer"}
/// {"event":"upload_finished","user":"alice"}
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    UploadQueued {
        user: String,
    },
    UserStats {
        user: String,
        files: u64,
        folders: u64,
        #[serde(default)]
        source: StatsSource,
    },
    UploadFinished {
        user: String,
    },
}
