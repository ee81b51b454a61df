// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

use super::{
    ConstPackedSizeBytes, REQUEST_POLL, REQUEST_PRECISION, REQUEST_REFERENCE_ID,
};

/// **NTP Short Format**: 16-bit seconds and 16-bit fraction, used for the
/// root delay and root dispersion header fields.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ShortFormat {
    /// Seconds component.
    pub seconds: u16,
    /// Fractional seconds component.
    pub fraction: u16,
}

/// **NTP Timestamp Format**: 32-bit seconds since 1900-01-01 00:00:00 UTC and
/// a 32-bit fraction.
///
/// ```ignore
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                            Seconds                            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                            Fraction                           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TimestampFormat {
    /// Seconds since the NTP epoch.
    pub seconds: u32,
    /// Fractional seconds.
    pub fraction: u32,
}

/// Two-bit leap second warning carried in the first header byte.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum LeapIndicator {
    /// No leap required.
    #[default]
    NoWarning = 0,
    /// Last minute of the day has 61 seconds.
    AddOne = 1,
    /// Last minute of the day has 59 seconds.
    SubOne = 2,
    /// Clock unsynchronized. Clients that have never been set send this.
    Unknown = 3,
}

impl LeapIndicator {
    /// Decode the two low bits of `value`.
    pub fn from_bits(value: u8) -> Self {
        match value & 0b11 {
            0 => LeapIndicator::NoWarning,
            1 => LeapIndicator::AddOne,
            2 => LeapIndicator::SubOne,
            _ => LeapIndicator::Unknown,
        }
    }
}

/// Three-bit protocol version number.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Version(pub(super) u8);

impl Version {
    /// NTP version 3.
    pub const V3: Version = Version(3);
    /// NTP version 4.
    pub const V4: Version = Version(4);

    /// The raw three-bit version number.
    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Three-bit association mode.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Mode {
    /// Reserved (0).
    Reserved = 0,
    /// Symmetric active (1).
    SymmetricActive = 1,
    /// Symmetric passive (2).
    SymmetricPassive = 2,
    /// Client (3).
    #[default]
    Client = 3,
    /// Server (4).
    Server = 4,
    /// Broadcast (5).
    Broadcast = 5,
    /// NTP control message (6).
    NtpControlMessage = 6,
    /// Reserved for private use (7).
    ReservedForPrivateUse = 7,
}

impl Mode {
    /// Decode the three low bits of `value`.
    pub fn from_bits(value: u8) -> Self {
        match value & 0b111 {
            0 => Mode::Reserved,
            1 => Mode::SymmetricActive,
            2 => Mode::SymmetricPassive,
            3 => Mode::Client,
            4 => Mode::Server,
            5 => Mode::Broadcast,
            6 => Mode::NtpControlMessage,
            _ => Mode::ReservedForPrivateUse,
        }
    }
}

/// Eight-bit stratum of the sender.
///
/// 0 is unspecified (and the Kiss-o'-Death marker in replies), 1 is a
/// primary server, 2-15 are secondary servers, 16 is unsynchronized.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Stratum(pub u8);

impl Stratum {
    /// Unspecified or invalid.
    pub const UNSPECIFIED: Stratum = Stratum(0);
    /// Primary server.
    pub const PRIMARY: Stratum = Stratum(1);
    /// Unsynchronized.
    pub const UNSYNCHRONIZED: Stratum = Stratum(16);
}

/// The 48-byte NTP header.
///
/// ```ignore
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |LI | VN  |Mode |    Stratum     |     Poll      |  Precision   |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                         Root Delay                            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                         Root Dispersion                       |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                          Reference ID                         |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                     Reference Timestamp (64)                  |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                      Origin Timestamp (64)                    |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                      Receive Timestamp (64)                   |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                      Transmit Timestamp (64)                  |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// The reference identifier is kept as raw bytes; this clock never
/// interprets it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Packet {
    /// Leap second warning.
    pub leap_indicator: LeapIndicator,
    /// Protocol version.
    pub version: Version,
    /// Association mode.
    pub mode: Mode,
    /// Stratum of the sender.
    pub stratum: Stratum,
    /// Poll exponent, log2 seconds.
    pub poll: i8,
    /// Clock precision, log2 seconds.
    pub precision: i8,
    /// Round-trip delay to the reference clock.
    pub root_delay: ShortFormat,
    /// Dispersion to the reference clock.
    pub root_dispersion: ShortFormat,
    /// Reference identifier, raw.
    pub reference_id: [u8; 4],
    /// Time the sender's clock was last set.
    pub reference_timestamp: TimestampFormat,
    /// Client transmit time echoed by the server.
    pub origin_timestamp: TimestampFormat,
    /// Time the request arrived at the server.
    pub receive_timestamp: TimestampFormat,
    /// Time the packet left the sender.
    pub transmit_timestamp: TimestampFormat,
}

impl Packet {
    /// The request this clock sends: unsynchronized NTPv4 client, stratum 0,
    /// poll 6, precision -20, reference id `"1N14"`, every timestamp zero.
    pub fn client_request() -> Self {
        Packet {
            leap_indicator: LeapIndicator::Unknown,
            version: Version::V4,
            mode: Mode::Client,
            stratum: Stratum::UNSPECIFIED,
            poll: REQUEST_POLL,
            precision: REQUEST_PRECISION,
            root_delay: ShortFormat::default(),
            root_dispersion: ShortFormat::default(),
            reference_id: REQUEST_REFERENCE_ID,
            reference_timestamp: TimestampFormat::default(),
            origin_timestamp: TimestampFormat::default(),
            receive_timestamp: TimestampFormat::default(),
            transmit_timestamp: TimestampFormat::default(),
        }
    }
}

impl ConstPackedSizeBytes for ShortFormat {
    const PACKED_SIZE_BYTES: usize = 4;
}

impl ConstPackedSizeBytes for TimestampFormat {
    const PACKED_SIZE_BYTES: usize = 8;
}

impl ConstPackedSizeBytes for Stratum {
    const PACKED_SIZE_BYTES: usize = 1;
}

impl ConstPackedSizeBytes for Packet {
    const PACKED_SIZE_BYTES: usize = super::PACKET_SIZE;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_indicator_from_bits_masks_high_bits() {
        assert_eq!(LeapIndicator::from_bits(0b1111_1111), LeapIndicator::Unknown);
        assert_eq!(LeapIndicator::from_bits(0b0000_0100), LeapIndicator::NoWarning);
        assert_eq!(LeapIndicator::from_bits(1), LeapIndicator::AddOne);
    }

    #[test]
    fn mode_from_bits_covers_all_values() {
        for bits in 0u8..8 {
            assert_eq!(Mode::from_bits(bits) as u8, bits);
        }
        assert_eq!(Mode::from_bits(0b1100), Mode::Server);
    }

    #[test]
    fn client_request_fields() {
        let request = Packet::client_request();
        assert_eq!(request.leap_indicator, LeapIndicator::Unknown);
        assert_eq!(request.version, Version::V4);
        assert_eq!(request.mode, Mode::Client);
        assert_eq!(request.precision as u8, 0xEC);
        assert_eq!(&request.reference_id, b"1N14");
    }
}
