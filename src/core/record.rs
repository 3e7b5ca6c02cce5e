//! Log record structure

use super::level::Level;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One immutable unit of log data, created at the emission site.
///
/// A record is read-only after construction; the delivery pipeline only ever
/// copies its formatted form into writer queues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: Level,
    pub category: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl LogRecord {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// to prevent attackers from injecting fake log entries.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: Level, category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            category: category.into(),
            message: Self::sanitize_message(&message.into()),
            timestamp: Utc::now(),
            file: None,
            line: None,
        }
    }

    pub fn with_location(mut self, file: &str, line: u32) -> Self {
        self.file = Some(file.to_string());
        self.line = Some(line);
        self
    }
}
