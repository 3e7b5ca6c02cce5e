//! Writer metrics for observability
//!
//! Counters for monitoring delivery health, in particular the number of
//! messages discarded by the async overflow policy.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters tracked by a writer.
///
/// All counters use relaxed atomics; they are operational signals, not
/// synchronization points.
///
/// # Example
///
/// ```
/// use logpipe::WriterMetrics;
///
/// let metrics = WriterMetrics::new();
/// metrics.record_written();
/// metrics.record_discarded();
///
/// assert_eq!(metrics.messages_written(), 1);
/// assert_eq!(metrics.messages_discarded(), 1);
/// ```
#[derive(Debug)]
pub struct WriterMetrics {
    /// Number of messages handed to the destination
    messages_written: AtomicU64,

    /// Number of messages discarded by the overflow policy
    messages_discarded: AtomicU64,

    /// Number of failed write attempts on the consumer thread
    write_errors: AtomicU64,
}

impl WriterMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            messages_written: AtomicU64::new(0),
            messages_discarded: AtomicU64::new(0),
            write_errors: AtomicU64::new(0),
        }
    }

    /// Get the number of messages written
    #[inline]
    pub fn messages_written(&self) -> u64 {
        self.messages_written.load(Ordering::Relaxed)
    }

    /// Get the number of messages discarded due to overflow
    #[inline]
    pub fn messages_discarded(&self) -> u64 {
        self.messages_discarded.load(Ordering::Relaxed)
    }

    /// Get the number of failed writes
    #[inline]
    pub fn write_errors(&self) -> u64 {
        self.write_errors.load(Ordering::Relaxed)
    }

    /// Record a written message
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.messages_written.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a discarded message
    #[inline]
    pub fn record_discarded(&self) -> u64 {
        self.messages_discarded.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed write
    #[inline]
    pub fn record_write_error(&self) -> u64 {
        self.write_errors.fetch_add(1, Ordering::Relaxed)
    }

    /// Get discard rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if no messages have been processed.
    pub fn discard_rate(&self) -> f64 {
        let discarded = self.messages_discarded() as f64;
        let total = self.messages_written() as f64 + discarded;
        if total == 0.0 {
            0.0
        } else {
            (discarded / total) * 100.0
        }
    }
}

impl Default for WriterMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for WriterMetrics {
    /// Create a snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            messages_written: AtomicU64::new(self.messages_written()),
            messages_discarded: AtomicU64::new(self.messages_discarded()),
            write_errors: AtomicU64::new(self.write_errors()),
        }
    }
}
