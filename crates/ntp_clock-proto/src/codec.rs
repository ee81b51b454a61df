// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

use byteorder::{BigEndian, ByteOrder};

use crate::error::ParseError;
use crate::protocol::{
    ConstPackedSizeBytes, MIN_REPLY_SIZE, PACKET_SIZE, Packet, TRANSMIT_SECONDS_OFFSET, ToBytes,
};
use crate::unix_time;

/// Build the 48-byte client request.
///
/// Returns a fresh buffer on every call; the result never depends on any
/// state, so requests can be sent back to back without clearing anything.
pub fn encode_request() -> [u8; PACKET_SIZE] {
    let mut buf = [0u8; Packet::PACKED_SIZE_BYTES];
    // The buffer is exactly the packed size, so serialization cannot fail.
    let _ = Packet::client_request().to_bytes(&mut buf);
    buf
}

/// Read the raw transmit seconds (since 1900) from a reply.
pub fn transmit_seconds(reply: &[u8]) -> Result<u32, ParseError> {
    if reply.len() < MIN_REPLY_SIZE {
        return Err(ParseError::MalformedReply {
            needed: MIN_REPLY_SIZE,
            available: reply.len(),
        });
    }
    Ok(BigEndian::read_u32(
        &reply[TRANSMIT_SECONDS_OFFSET..MIN_REPLY_SIZE],
    ))
}

/// Decode a reply into Unix epoch seconds.
///
/// Only bytes 40..44 are read, so any reply of at least 44 bytes is
/// accepted. A timestamp before 1970 wraps around instead of failing; see
/// [`decode_reply_checked`] for the strict variant.
///
/// # Errors
///
/// [`ParseError::MalformedReply`] if `reply` is shorter than 44 bytes.
pub fn decode_reply(reply: &[u8]) -> Result<u32, ParseError> {
    transmit_seconds(reply).map(unix_time::ntp_to_unix)
}

/// Decode a reply into Unix epoch seconds, rejecting pre-1970 timestamps.
///
/// # Errors
///
/// [`ParseError::MalformedReply`] if `reply` is shorter than 44 bytes,
/// [`ParseError::BeforeUnixEpoch`] if the timestamp precedes 1970.
pub fn decode_reply_checked(reply: &[u8]) -> Result<u32, ParseError> {
    let ntp_seconds = transmit_seconds(reply)?;
    unix_time::ntp_to_unix_checked(ntp_seconds)
        .ok_or(ParseError::BeforeUnixEpoch { ntp_seconds })
}
