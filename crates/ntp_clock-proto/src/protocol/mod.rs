// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! NTP header types and the constants of the clock's request packet.
//!
//! Only the 48-byte fixed header is modelled; extension fields and MACs are
//! neither sent nor inspected. Documentation of the header fields follows
//! IETF RFC 5905.

/// NTP server port number.
pub const PORT: u16 = 123;

/// Size of the fixed NTP header, and of every request this clock sends.
pub const PACKET_SIZE: usize = 48;

/// Byte offset of the transmit timestamp's seconds field within a reply.
pub const TRANSMIT_SECONDS_OFFSET: usize = 40;

/// Minimum reply length that still contains the transmit seconds.
pub const MIN_REPLY_SIZE: usize = TRANSMIT_SECONDS_OFFSET + 4;

/// Packed LI/VN/mode byte of the request: LI 3 (unsynchronized), version 4, client mode.
pub const REQUEST_LI_VN_MODE: u8 = 0xE3;

/// Poll exponent advertised in the request (2^6 = 64 s).
pub const REQUEST_POLL: i8 = 6;

/// Precision advertised in the request (2^-20 s, encoded as `0xEC`).
pub const REQUEST_PRECISION: i8 = -20;

/// Reference identifier carried in the request, ASCII `"1N14"`.
pub const REQUEST_REFERENCE_ID: [u8; 4] = [49, 0x4E, 49, 52];

mod bytes;
mod traits;
mod types;

pub use self::traits::*;
pub use self::types::*;
