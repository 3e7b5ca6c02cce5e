//! Record serialization
//!
//! A formatter is a pure function from [`LogRecord`] to bytes. Two styles are
//! provided:
//! - [`TextFormatter`]: human-readable single-line format (default)
//! - [`JsonFormatter`]: one JSON object per line for machine processing

use super::record::LogRecord;

/// Serializes a log record into the byte sequence handed to a writer.
///
/// Formatters hold no shared state and are safe to call from any thread.
pub trait Formatter: Send + Sync {
    fn format(&self, record: &LogRecord) -> Vec<u8>;
    fn name(&self) -> &str;
}

/// Human-readable single-line format (default style).
///
/// Example: `[2025-01-08 10:30:45.123] [INFO ] [app.net] Request processed (net.rs:42)`
#[derive(Debug, Default, Clone)]
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for TextFormatter {
    fn format(&self, record: &LogRecord) -> Vec<u8> {
        let mut output = format!(
            "[{}] [{:5}] [{}] {}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level.to_str(),
            record.category,
            record.message
        );

        if let (Some(file), Some(line)) = (&record.file, record.line) {
            output.push_str(&format!(" ({}:{})", file, line));
        }

        output.push('\n');
        output.into_bytes()
    }

    fn name(&self) -> &str {
        "text"
    }
}

/// One JSON object per line, serialized with serde.
#[derive(Debug, Default, Clone)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, record: &LogRecord) -> Vec<u8> {
        // Serialization of a plain record cannot fail in practice; fall back
        // to an empty line rather than propagating an error from a pure path.
        let mut output = serde_json::to_vec(record).unwrap_or_default();
        output.push(b'\n');
        output
    }

    fn name(&self) -> &str {
        "json"
    }
}
