use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("Invalid event on line {line}: {source}")]
    EventError {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
