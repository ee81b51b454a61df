// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Error types for the clock.
//!
//! [`ClockError::Resolution`] is the only fatal error: it is returned from
//! [`PollDriver::initialize`](crate::driver::PollDriver::initialize) and the
//! caller decides whether to retry or give up. Every error raised inside the
//! poll loop is logged and the loop carries on.
//!
//! `ClockError` converts into [`io::Error`]; the original can be recovered
//! with a downcast:
//!
//! ```
//! use std::io;
//! use clock_client::error::{ClockError, ConfigError};
//!
//! let err: io::Error = ClockError::Config(ConfigError::EmptyServerHost).into();
//! assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
//! let inner = err.get_ref().and_then(|e| e.downcast_ref::<ClockError>());
//! assert!(matches!(inner, Some(ClockError::Config(ConfigError::EmptyServerHost))));
//! ```

pub use clock_proto::error::ParseError;

use std::fmt;
use std::io;

/// Errors that can occur while setting up or running the clock.
#[derive(Debug)]
pub enum ClockError {
    /// The NTP server host name could not be resolved.
    Resolution {
        /// The host name that failed to resolve.
        host: String,
        /// The underlying lookup failure, if the resolver reported one.
        source: Option<io::Error>,
    },
    /// Invalid configuration.
    Config(ConfigError),
    /// A reply could not be decoded.
    Parse(ParseError),
    /// Transport or display I/O failure.
    Io(io::Error),
}

/// Configuration errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The NTP server host name is empty.
    EmptyServerHost,
    /// The UTC offset lies outside -12..=14 hours.
    UtcOffsetOutOfRange {
        /// The rejected offset.
        hours: i32,
    },
    /// An interval that must be positive is zero.
    ZeroInterval {
        /// Which interval.
        name: &'static str,
    },
    /// An environment variable holds a value that does not parse.
    InvalidValue {
        /// The variable name.
        variable: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockError::Resolution { host, source } => match source {
                Some(e) => write!(f, "failed to resolve NTP server {host}: {e}"),
                None => write!(f, "NTP server {host} resolved to no usable address"),
            },
            ClockError::Config(e) => write!(f, "clock config error: {e}"),
            ClockError::Parse(e) => write!(f, "{e}"),
            ClockError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyServerHost => write!(f, "NTP server host name is empty"),
            ConfigError::UtcOffsetOutOfRange { hours } => {
                write!(f, "UTC offset {hours}h is outside -12..=14")
            }
            ConfigError::ZeroInterval { name } => write!(f, "{name} must be greater than zero"),
            ConfigError::InvalidValue { variable, value } => {
                write!(f, "invalid value for {variable}: {value:?}")
            }
        }
    }
}

impl std::error::Error for ClockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClockError::Resolution {
                source: Some(e), ..
            } => Some(e),
            ClockError::Config(e) => Some(e),
            ClockError::Parse(e) => Some(e),
            ClockError::Io(e) => Some(e),
            ClockError::Resolution { source: None, .. } => None,
        }
    }
}

impl std::error::Error for ConfigError {}

// ── From conversions ────────────────────────────────────────────────

impl From<ClockError> for io::Error {
    fn from(err: ClockError) -> io::Error {
        let kind = match &err {
            ClockError::Resolution { .. } => io::ErrorKind::NotFound,
            ClockError::Config(_) => io::ErrorKind::InvalidInput,
            ClockError::Parse(_) => io::ErrorKind::InvalidData,
            ClockError::Io(e) => e.kind(),
        };
        // Preserve the original io::Error directly for the Io variant.
        if let ClockError::Io(e) = err {
            return e;
        }
        io::Error::new(kind, err)
    }
}

impl From<io::Error> for ClockError {
    fn from(err: io::Error) -> ClockError {
        ClockError::Io(err)
    }
}

impl From<ParseError> for ClockError {
    fn from(err: ParseError) -> ClockError {
        ClockError::Parse(err)
    }
}

impl From<ConfigError> for ClockError {
    fn from(err: ConfigError) -> ClockError {
        ClockError::Config(err)
    }
}
