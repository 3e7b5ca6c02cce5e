//! Writer implementations
//!
//! A writer is the sink capability of the pipeline: it takes formatted bytes
//! and gets them to a destination. Two variants exist: [`ImmediateWriter`]
//! writes synchronously on the caller's thread; [`AsyncFileWriter`] queues
//! bytes for a single background drain thread.

pub mod async_writer;
pub mod destination;
pub mod immediate;

use crate::core::Result;
use std::any::Any;

/// Sink capability for formatted log bytes.
///
/// Implementations must be callable concurrently from any number of threads.
pub trait LogWriter: Send + Sync {
    /// Deliver one formatted message to the destination.
    fn write(&self, bytes: &[u8]) -> Result<()>;

    /// Block until previously accepted messages have been issued to the
    /// destination.
    fn flush(&self) -> Result<()>;

    fn name(&self) -> &str;

    /// Access to the concrete writer type, for introspection in
    /// configuration and test code.
    fn as_any(&self) -> &dyn Any;
}

pub use async_writer::AsyncFileWriter;
pub use destination::Destination;
pub use immediate::ImmediateWriter;
