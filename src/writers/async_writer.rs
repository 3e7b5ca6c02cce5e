//! Asynchronous writer with a bounded queue and a background drain thread
//!
//! Producers append formatted messages to a byte-budgeted queue under a short
//! critical section and never block on I/O. A single consumer thread swaps
//! the whole queue out under the lock and performs the writes outside it, so
//! producers are never stalled by a slow destination. When the queue is full
//! the new message is discarded and counted; logging must never apply
//! backpressure to application threads.

use super::destination::Destination;
use super::LogWriter;
use crate::core::{Result, WriterMetrics};
use parking_lot::{Condvar, Mutex};
use std::any::Any;
use std::io::{self, Write};
use std::sync::Arc;
use std::thread;

/// Queue state guarded by the writer mutex.
struct Inner {
    /// Messages accepted since the last swap, in enqueue order
    queue: Vec<Vec<u8>>,
    /// Total bytes held in `queue`; never exceeds the writer capacity
    queued_bytes: usize,
    /// Messages discarded since the consumer last drained
    discarded_since_drain: u64,
    /// Set once by `shutdown`; producers discard from then on
    shutdown: bool,
    /// True while the consumer is writing a swapped-out batch
    draining: bool,
    /// Set by the consumer just before it exits
    stopped: bool,
    /// Completed drain passes; the flush barrier is expressed in epochs
    epoch: u64,
}

struct Shared {
    inner: Mutex<Inner>,
    /// Wakes the consumer on enqueue, flush and shutdown
    message_ready: Condvar,
    /// Wakes flush callers when a drain pass completes
    drain_done: Condvar,
    metrics: WriterMetrics,
}

impl Shared {
    fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                queue: Vec::new(),
                queued_bytes: 0,
                discarded_since_drain: 0,
                shutdown: false,
                draining: false,
                stopped: false,
                epoch: 0,
            }),
            message_ready: Condvar::new(),
            drain_done: Condvar::new(),
            metrics: WriterMetrics::new(),
        }
    }

    /// Producer side: link one owned entry into the queue, or discard it if
    /// the byte budget would be exceeded. No I/O happens under the lock.
    fn enqueue(&self, capacity: usize, entry: Vec<u8>) {
        let len = entry.len();
        let mut inner = self.inner.lock();
        if inner.shutdown || inner.queued_bytes + len > capacity {
            inner.discarded_since_drain += 1;
            drop(inner);
            self.metrics.record_discarded();
            return;
        }
        inner.queued_bytes += len;
        inner.queue.push(entry);
        drop(inner);
        self.message_ready.notify_one();
    }
}

/// Writer that queues messages for a dedicated background thread.
///
/// Exactly one consumer thread exists per instance, started at construction
/// and joined during [`shutdown`](AsyncFileWriter::shutdown) (or drop) after
/// draining everything still queued. Accepted messages are written in FIFO
/// order; only the overflow policy discards.
pub struct AsyncFileWriter {
    shared: Arc<Shared>,
    capacity: usize,
    handle: Mutex<Option<thread::JoinHandle<()>>>,
}

impl AsyncFileWriter {
    /// Default queue capacity in bytes (1 MiB)
    pub const DEFAULT_MAX_BUFFER_SIZE: usize = 1024 * 1024;

    pub fn new(destination: Destination) -> Self {
        Self::with_capacity(destination, Self::DEFAULT_MAX_BUFFER_SIZE)
    }

    /// Create a writer with a custom queue capacity in bytes.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; the factory validates this before
    /// construction.
    pub fn with_capacity(destination: Destination, capacity: usize) -> Self {
        assert!(capacity > 0, "async writer capacity must be positive");

        let shared = Arc::new(Shared::new());
        let worker = Arc::clone(&shared);
        let handle = thread::spawn(move || Self::run(&worker, destination));

        Self {
            shared,
            capacity,
            handle: Mutex::new(Some(handle)),
        }
    }

    /// Queue capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of messages discarded by the overflow policy so far.
    pub fn discarded_count(&self) -> u64 {
        self.shared.metrics.messages_discarded()
    }

    /// Delivery counters for this writer.
    pub fn metrics(&self) -> &WriterMetrics {
        &self.shared.metrics
    }

    /// Stop accepting messages, drain everything still queued, and join the
    /// consumer thread. Calling this more than once is a no-op.
    pub fn shutdown(&self) {
        {
            let mut inner = self.shared.inner.lock();
            inner.shutdown = true;
        }
        self.shared.message_ready.notify_one();

        if let Some(handle) = self.handle.lock().take() {
            if handle.join().is_err() {
                eprintln!("[LOGGER ERROR] async writer thread panicked during shutdown");
            }
        }
    }

    /// Consumer thread body.
    fn run(shared: &Shared, mut destination: Destination) {
        loop {
            let (batch, discarded) = {
                let mut inner = shared.inner.lock();
                loop {
                    if !inner.queue.is_empty() || inner.discarded_since_drain > 0 {
                        break;
                    }
                    if inner.shutdown {
                        inner.stopped = true;
                        shared.drain_done.notify_all();
                        return;
                    }
                    shared.message_ready.wait(&mut inner);
                }
                // Swap the queue contents out so producers are never blocked
                // by the writes below.
                inner.draining = true;
                inner.queued_bytes = 0;
                (
                    std::mem::take(&mut inner.queue),
                    std::mem::take(&mut inner.discarded_since_drain),
                )
            };

            Self::write_batch(shared, &mut destination, &batch, discarded);

            let mut inner = shared.inner.lock();
            inner.draining = false;
            inner.epoch += 1;
            shared.drain_done.notify_all();
        }
    }

    /// Write one swapped-out batch in FIFO order, outside any lock.
    ///
    /// A write failure is counted and reported, and the consumer keeps
    /// attempting subsequent writes; delivery errors never unwind into
    /// application code.
    fn write_batch(
        shared: &Shared,
        destination: &mut Destination,
        batch: &[Vec<u8>],
        discarded: u64,
    ) {
        let mut batch_error: Option<io::Error> = None;
        for entry in batch {
            match destination.write_all(entry) {
                Ok(()) => {
                    shared.metrics.record_written();
                }
                Err(e) => {
                    shared.metrics.record_write_error();
                    if batch_error.is_none() {
                        batch_error = Some(e);
                    }
                }
            }
        }

        if let Some(e) = batch_error {
            eprintln!(
                "[LOGGER ERROR] async writer failed writing to {}: {}",
                destination.describe(),
                e
            );
        }

        // Make overflow drops visible in the output stream itself, not just
        // in the counters.
        if discarded > 0 {
            let notice = format!(
                "discarded {} log messages: logging faster than they can be written\n",
                discarded
            );
            let _ = destination.write_all(notice.as_bytes());
        }

        let _ = destination.flush();
    }
}

impl LogWriter for AsyncFileWriter {
    fn write(&self, bytes: &[u8]) -> Result<()> {
        // Copy before taking the lock; the critical section only links the
        // entry and updates the byte counter.
        self.shared.enqueue(self.capacity, bytes.to_vec());
        Ok(())
    }

    /// Block until everything enqueued before this call has been issued to
    /// the destination.
    ///
    /// The barrier is expressed in drain epochs: the in-flight batch (if
    /// any) completes at `epoch + 1`, and the currently queued contents
    /// complete one pass later. Messages racing with the call may or may not
    /// be included; nothing enqueued after it extends the wait.
    fn flush(&self) -> Result<()> {
        let mut inner = self.shared.inner.lock();
        let queue_pending = !inner.queue.is_empty() || inner.discarded_since_drain > 0;
        if !queue_pending && !inner.draining {
            return Ok(());
        }

        let mut target = inner.epoch;
        if inner.draining {
            target += 1;
        }
        if queue_pending {
            target += 1;
        }

        self.shared.message_ready.notify_one();
        while inner.epoch < target && !inner.stopped {
            self.shared.drain_done.wait(&mut inner);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "async_file"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Drop for AsyncFileWriter {
    fn drop(&mut self) {
        self.shutdown();
    }
}
