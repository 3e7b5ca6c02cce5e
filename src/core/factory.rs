//! Declarative handler construction
//!
//! A handler is built from a string-to-string option map, the sole external
//! configuration surface. All validation happens here, at construction time;
//! no option error is ever deferred to the delivery path.

use super::error::{LoggerError, Result};
use super::formatter::TextFormatter;
use super::handler::StandardLogHandler;
use crate::writers::{AsyncFileWriter, Destination, ImmediateWriter, LogWriter};
use std::collections::HashMap;
use std::sync::Arc;

/// Option map accepted by [`FileHandlerFactory::create_handler`].
pub type Options = HashMap<String, String>;

/// Builds fully wired handlers that log to a file or standard stream.
///
/// Recognized options:
/// - `path`: log file path, opened with create/append semantics
/// - `stream`: `stdout` or `stderr` (exactly one of `path`/`stream` required)
/// - `async`: boolean, default true; selects the queued background writer
/// - `max_buffer_size`: positive byte count for the async queue; only valid
///   together with a truthy `async`
///
/// Any other key is rejected.
#[derive(Debug, Default)]
pub struct FileHandlerFactory;

impl FileHandlerFactory {
    pub fn new() -> Self {
        Self
    }

    /// Build a handler from the given options, or fail with
    /// [`LoggerError::InvalidConfiguration`] describing the first violation.
    ///
    /// On success the returned handler wraps the default text formatter and
    /// either an [`AsyncFileWriter`] (default) or an [`ImmediateWriter`],
    /// with the gate level defaulted to accept everything.
    pub fn create_handler(&self, options: &Options) -> Result<Arc<StandardLogHandler>> {
        let mut path: Option<&str> = None;
        let mut stream: Option<&str> = None;
        let mut is_async = true;
        let mut max_buffer_size: Option<usize> = None;

        for (name, value) in options {
            match name.as_str() {
                "path" => path = Some(value.as_str()),
                "stream" => stream = Some(value.as_str()),
                "async" => {
                    is_async = parse_bool(value).ok_or_else(|| {
                        LoggerError::config(format!("invalid async value \"{}\"", value))
                    })?;
                }
                "max_buffer_size" => {
                    let size: usize = value.parse().map_err(|_| {
                        LoggerError::config(format!("invalid max_buffer_size \"{}\"", value))
                    })?;
                    if size == 0 {
                        return Err(LoggerError::config(
                            "max_buffer_size must be a positive integer",
                        ));
                    }
                    max_buffer_size = Some(size);
                }
                other => {
                    return Err(LoggerError::config(format!(
                        "unknown parameter \"{}\"",
                        other
                    )));
                }
            }
        }

        if !is_async && max_buffer_size.is_some() {
            return Err(LoggerError::config(
                "the \"max_buffer_size\" option is only valid for async writers",
            ));
        }

        // All combination checks pass before the destination is opened, so a
        // rejected option set never creates a file as a side effect.
        let destination = match (path, stream) {
            (Some(_), Some(_)) => {
                return Err(LoggerError::config(
                    "cannot specify both \"path\" and \"stream\"",
                ));
            }
            (None, None) => {
                return Err(LoggerError::config(
                    "one of \"path\" or \"stream\" is required",
                ));
            }
            (Some(path), None) => Destination::open_path(path)?,
            (None, Some(stream)) => Destination::open_stream(stream)?,
        };

        let writer: Arc<dyn LogWriter> = if is_async {
            let capacity = max_buffer_size.unwrap_or(AsyncFileWriter::DEFAULT_MAX_BUFFER_SIZE);
            Arc::new(AsyncFileWriter::with_capacity(destination, capacity))
        } else {
            Arc::new(ImmediateWriter::new(destination))
        };

        Ok(Arc::new(StandardLogHandler::new(
            Arc::new(TextFormatter::new()),
            writer,
        )))
    }
}

/// Parse the accepted boolean spellings, case-insensitively.
fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "on" => Some(true),
        "false" | "no" | "n" | "0" | "off" => Some(false),
        _ => None,
    }
}
