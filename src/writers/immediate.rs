//! Synchronous writer
//!
//! Writes directly on the calling thread with no buffering or queue. Used as
//! the fallback when asynchronous delivery is not requested, and as the
//! baseline the async writer is compared against.

use super::destination::Destination;
use super::LogWriter;
use crate::core::Result;
use parking_lot::Mutex;
use std::any::Any;
use std::io::Write;

/// Writer that performs a direct, blocking write call per message.
///
/// `write` returns only after the underlying write completes or fails, and
/// the failure is surfaced to the calling thread. Interleaving of concurrent
/// writes at the destination is serialized by the internal lock; whether the
/// destination itself tolerates writes from other handles is the caller's
/// responsibility.
pub struct ImmediateWriter {
    destination: Mutex<Destination>,
}

impl ImmediateWriter {
    pub fn new(destination: Destination) -> Self {
        Self {
            destination: Mutex::new(destination),
        }
    }

    /// Human-readable destination name, for diagnostics.
    pub fn destination_name(&self) -> String {
        self.destination.lock().describe()
    }
}

impl LogWriter for ImmediateWriter {
    fn write(&self, bytes: &[u8]) -> Result<()> {
        let mut destination = self.destination.lock();
        destination.write_all(bytes)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let mut destination = self.destination.lock();
        destination.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "immediate"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
