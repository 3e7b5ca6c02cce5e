//! Level-gated handler binding a formatter to a writer

use super::formatter::Formatter;
use super::level::Level;
use super::record::LogRecord;
use super::Result;
use crate::writers::LogWriter;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Receives records dispatched by the category registry.
pub trait LogHandler: Send + Sync {
    /// Handle one record. `handler_category` is the category this handler is
    /// attached to, which may be an ancestor of the record's own category.
    fn handle_message(&self, record: &LogRecord, handler_category: &str);

    /// Block until previously accepted records have been delivered.
    fn flush(&self) -> Result<()>;
}

/// Handler that serializes a record with a [`Formatter`] and hands the bytes
/// to a [`LogWriter`], ignoring records below its gate level.
///
/// The formatter and writer are fixed at construction and can be read
/// without locking while handling a message. The gate level is the only
/// mutable field, managed with acquire/release atomics so configuration
/// threads and logging threads never contend on a mutex. To reconfigure
/// anything else, build a new handler and swap it into the registry.
pub struct StandardLogHandler {
    level: AtomicU8,
    formatter: Arc<dyn Formatter>,
    writer: Arc<dyn LogWriter>,
}

impl StandardLogHandler {
    /// Create a handler with the gate defaulted to [`Level::None`], which
    /// accepts every record.
    pub fn new(formatter: Arc<dyn Formatter>, writer: Arc<dyn LogWriter>) -> Self {
        Self {
            level: AtomicU8::new(Level::None as u8),
            formatter,
            writer,
        }
    }

    /// Get the handler's current gate level. Records below it are ignored.
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Acquire))
    }

    /// Set the handler's gate level.
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Release);
    }

    /// The formatter used by this handler.
    pub fn formatter(&self) -> &Arc<dyn Formatter> {
        &self.formatter
    }

    /// The writer used by this handler.
    pub fn writer(&self) -> &Arc<dyn LogWriter> {
        &self.writer
    }
}

impl std::fmt::Debug for StandardLogHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardLogHandler")
            .field("level", &self.level())
            .field("formatter", &self.formatter.name())
            .field("writer", &self.writer.name())
            .finish()
    }
}

impl LogHandler for StandardLogHandler {
    fn handle_message(&self, record: &LogRecord, _handler_category: &str) {
        // Fast path: runs for every record emitted in the process, so it
        // must stay branch-cheap and allocation-free.
        if record.level < self.level() {
            return;
        }

        let bytes = self.formatter.format(record);
        // A write failure is the writer's concern; nothing propagates to the
        // emission call site.
        let _ = self.writer.write(&bytes);
    }

    fn flush(&self) -> Result<()> {
        self.writer.flush()
    }
}
