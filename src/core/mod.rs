//! Core pipeline types and traits

pub mod error;
pub mod factory;
pub mod formatter;
pub mod handler;
pub mod level;
pub mod metrics;
pub mod record;
pub mod registry;

pub use error::{LoggerError, Result};
pub use factory::{FileHandlerFactory, Options};
pub use formatter::{Formatter, JsonFormatter, TextFormatter};
pub use handler::{LogHandler, StandardLogHandler};
pub use level::Level;
pub use metrics::WriterMetrics;
pub use record::LogRecord;
pub use registry::CategoryRegistry;
