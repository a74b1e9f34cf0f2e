use std::fmt;
use std::fmt::Formatter;
use crate::host::enums::stats_source::StatsSource;

impl fmt::Display for StatsSource {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            StatsSource::Server => write!(f, "server"),
            StatsSource::Peer => write!(f, "peer"),
        }
    }
}
