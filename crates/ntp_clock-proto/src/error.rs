// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Error types for reply decoding and packet serialization.
//!
//! [`ParseError`] is `no_std`-compatible and allocation free. With the `std`
//! feature it also implements [`std::error::Error`] and converts into
//! [`std::io::Error`].

use core::fmt;

/// Errors produced while decoding a reply or serializing a packet.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The reply is too short to contain the transmit timestamp seconds.
    MalformedReply {
        /// Number of bytes needed.
        needed: usize,
        /// Number of bytes available.
        available: usize,
    },
    /// The output buffer is too short for the value being written, or an
    /// input buffer is too short for a fixed-size header field.
    BufferTooShort {
        /// Number of bytes needed.
        needed: usize,
        /// Number of bytes available.
        available: usize,
    },
    /// The reply timestamp lies before 1970-01-01 and cannot be represented
    /// as unsigned Unix seconds.
    BeforeUnixEpoch {
        /// The raw seconds-since-1900 value from the reply.
        ntp_seconds: u32,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MalformedReply { needed, available } => {
                write!(
                    f,
                    "malformed NTP reply: needed {} bytes, got {}",
                    needed, available
                )
            }
            ParseError::BufferTooShort { needed, available } => {
                write!(
                    f,
                    "buffer too short: needed {} bytes, got {}",
                    needed, available
                )
            }
            ParseError::BeforeUnixEpoch { ntp_seconds } => {
                write!(
                    f,
                    "reply timestamp {} precedes the Unix epoch",
                    ntp_seconds
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl From<ParseError> for std::io::Error {
    fn from(err: ParseError) -> std::io::Error {
        let kind = match &err {
            ParseError::MalformedReply { .. } => std::io::ErrorKind::InvalidData,
            ParseError::BufferTooShort { .. } => std::io::ErrorKind::UnexpectedEof,
            ParseError::BeforeUnixEpoch { .. } => std::io::ErrorKind::InvalidData,
        };
        std::io::Error::new(kind, err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
