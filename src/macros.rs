//! Emission macros
//!
//! These macros build a [`LogRecord`](crate::LogRecord) with the call site's
//! source location and dispatch it through a [`CategoryRegistry`](crate::CategoryRegistry),
//! with `println!`-style formatting.
//!
//! # Examples
//!
//! ```
//! use logpipe::prelude::*;
//! use logpipe::info;
//!
//! let registry = CategoryRegistry::new();
//!
//! // Basic emission
//! info!(registry, "server", "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(registry, "server", "Listening on port {}", port);
//! ```

/// Emit a record at an explicit level.
///
/// # Examples
///
/// ```
/// # use logpipe::prelude::*;
/// # let registry = CategoryRegistry::new();
/// use logpipe::log;
/// log!(registry, Level::Info, "app", "Simple message");
/// log!(registry, Level::Error, "app", "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($registry:expr, $level:expr, $category:expr, $($arg:tt)+) => {
        $registry.dispatch(
            &$crate::LogRecord::new($level, $category, format!($($arg)+))
                .with_location(file!(), line!()),
        )
    };
}

/// Emit a debug-level record.
#[macro_export]
macro_rules! debug {
    ($registry:expr, $category:expr, $($arg:tt)+) => {
        $crate::log!($registry, $crate::Level::Debug, $category, $($arg)+)
    };
}

/// Emit an info-level record.
#[macro_export]
macro_rules! info {
    ($registry:expr, $category:expr, $($arg:tt)+) => {
        $crate::log!($registry, $crate::Level::Info, $category, $($arg)+)
    };
}

/// Emit a warn-level record.
#[macro_export]
macro_rules! warn {
    ($registry:expr, $category:expr, $($arg:tt)+) => {
        $crate::log!($registry, $crate::Level::Warn, $category, $($arg)+)
    };
}

/// Emit an error-level record.
#[macro_export]
macro_rules! error {
    ($registry:expr, $category:expr, $($arg:tt)+) => {
        $crate::log!($registry, $crate::Level::Error, $category, $($arg)+)
    };
}
