//! # logpipe
//!
//! A process-local log delivery pipeline: structured records produced
//! anywhere in an application are level-gated, serialized, and reliably
//! delivered to a destination without letting logging block or deadlock the
//! emitting threads.
//!
//! ## Features
//!
//! - **Non-blocking delivery**: bounded queue drained by a single background
//!   thread; overflow discards and counts instead of applying backpressure
//! - **Level-gated handlers**: lock-free gate checked on every emission
//! - **Declarative configuration**: handlers built from string option maps
//!   with exhaustive construction-time validation
//! - **Category hierarchy**: records dispatch to the nearest ancestor
//!   category's handlers

pub mod core;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        CategoryRegistry, FileHandlerFactory, Formatter, JsonFormatter, Level, LogHandler,
        LogRecord, LoggerError, Options, Result, StandardLogHandler, TextFormatter, WriterMetrics,
    };
    pub use crate::writers::{AsyncFileWriter, Destination, ImmediateWriter, LogWriter};
}

pub use crate::core::{
    CategoryRegistry, FileHandlerFactory, Formatter, JsonFormatter, Level, LogHandler, LogRecord,
    LoggerError, Options, Result, StandardLogHandler, TextFormatter, WriterMetrics,
};
pub use crate::writers::{AsyncFileWriter, Destination, ImmediateWriter, LogWriter};
