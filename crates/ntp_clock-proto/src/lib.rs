// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! NTP request/reply codec and civil time conversion for a display clock.
//!
//! Everything in this crate is pure data transformation: building the fixed
//! 48-byte client request, extracting the transmit seconds from a server
//! reply, and turning Unix epoch seconds into calendar fields. No I/O, no
//! allocation, so the same code runs on a microcontroller (`default-features
//! = false`) and on a host.
//!
//! ```
//! use clock_proto::{civil, codec, unix_time};
//!
//! let request = codec::encode_request();
//! assert_eq!(request[0], 0xE3);
//!
//! let mut reply = [0u8; 48];
//! reply[40..44].copy_from_slice(&[0x83, 0xAA, 0x7E, 0x80]);
//! let epoch = codec::decode_reply(&reply).unwrap();
//!
//! let utc = civil::to_civil(epoch);
//! let local = civil::to_civil(unix_time::apply_offset(epoch, 7));
//! assert_eq!(utc.year, 1970);
//! assert_eq!(local.hour, (utc.hour + 7) % 24);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Error types for reply decoding and packet serialization.
pub mod error;

/// NTP header types and constants (RFC 5905), with slice-based parsing.
pub mod protocol;

/// Building request payloads and decoding reply payloads.
pub mod codec;

/// NTP-to-Unix epoch conversion, timezone offsets, and weekday arithmetic.
pub mod unix_time;

/// Proleptic Gregorian calendar decomposition of Unix epoch seconds.
pub mod civil;

pub use civil::{CivilTime, Weekday, WeekdayLabels, to_civil};
pub use codec::{decode_reply, decode_reply_checked, encode_request};
pub use error::ParseError;
pub use unix_time::{apply_offset, weekday_index};
