//! Error types for the log delivery pipeline

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Invalid handler configuration, reported at construction time only
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Destination handle could not be opened or resolved
    #[error("cannot open log destination '{target}': {source}")]
    DestinationUnavailable {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure during an actual write
    #[error("write failed: {0}")]
    WriteFailure(#[from] std::io::Error),
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create a destination unavailable error
    pub fn destination(target: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::DestinationUnavailable {
            target: target.into(),
            source,
        }
    }
}
