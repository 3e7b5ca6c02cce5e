//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity level of a log record.
///
/// Levels are totally ordered and compared numerically. `None` is the
/// sentinel at the bottom of the order: a handler or category gated at
/// `None` accepts every record, since no level orders below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub enum Level {
    #[default]
    None = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl Level {
    pub fn to_str(&self) -> &'static str {
        match self {
            Level::None => "NONE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Recover a level from its stored numeric form.
    ///
    /// Out-of-range values clamp to `Error`; the only producers of the
    /// numeric form are `as u8` casts of valid levels.
    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => Level::None,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            _ => Level::Error,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NONE" => Ok(Level::None),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
