// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

use byteorder::{BigEndian, ByteOrder};

use crate::error::ParseError;

use super::{
    ConstPackedSizeBytes, FromBytes, LeapIndicator, Mode, Packet, ShortFormat, Stratum,
    TimestampFormat, ToBytes, Version,
};

fn ensure_len(buf_len: usize, needed: usize) -> Result<(), ParseError> {
    if buf_len < needed {
        return Err(ParseError::BufferTooShort {
            needed,
            available: buf_len,
        });
    }
    Ok(())
}

impl FromBytes for ShortFormat {
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), ParseError> {
        ensure_len(buf.len(), Self::PACKED_SIZE_BYTES)?;
        let seconds = BigEndian::read_u16(&buf[0..2]);
        let fraction = BigEndian::read_u16(&buf[2..4]);
        Ok((ShortFormat { seconds, fraction }, Self::PACKED_SIZE_BYTES))
    }
}

impl FromBytes for TimestampFormat {
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), ParseError> {
        ensure_len(buf.len(), Self::PACKED_SIZE_BYTES)?;
        let seconds = BigEndian::read_u32(&buf[0..4]);
        let fraction = BigEndian::read_u32(&buf[4..8]);
        Ok((
            TimestampFormat { seconds, fraction },
            Self::PACKED_SIZE_BYTES,
        ))
    }
}

impl FromBytes for Packet {
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), ParseError> {
        ensure_len(buf.len(), Self::PACKED_SIZE_BYTES)?;

        let li_vn_mode = buf[0];
        let leap_indicator = LeapIndicator::from_bits(li_vn_mode >> 6);
        let version = Version((li_vn_mode >> 3) & 0b111);
        let mode = Mode::from_bits(li_vn_mode);
        let stratum = Stratum(buf[1]);
        let poll = buf[2] as i8;
        let precision = buf[3] as i8;

        let mut offset = 4;
        let (root_delay, n) = ShortFormat::from_bytes(&buf[offset..])?;
        offset += n;
        let (root_dispersion, n) = ShortFormat::from_bytes(&buf[offset..])?;
        offset += n;

        let mut reference_id = [0u8; 4];
        reference_id.copy_from_slice(&buf[offset..offset + 4]);
        offset += 4;

        let (reference_timestamp, n) = TimestampFormat::from_bytes(&buf[offset..])?;
        offset += n;
        let (origin_timestamp, n) = TimestampFormat::from_bytes(&buf[offset..])?;
        offset += n;
        let (receive_timestamp, n) = TimestampFormat::from_bytes(&buf[offset..])?;
        offset += n;
        let (transmit_timestamp, n) = TimestampFormat::from_bytes(&buf[offset..])?;
        offset += n;

        Ok((
            Packet {
                leap_indicator,
                version,
                mode,
                stratum,
                poll,
                precision,
                root_delay,
                root_dispersion,
                reference_id,
                reference_timestamp,
                origin_timestamp,
                receive_timestamp,
                transmit_timestamp,
            },
            offset,
        ))
    }
}

impl ToBytes for ShortFormat {
    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, ParseError> {
        ensure_len(buf.len(), Self::PACKED_SIZE_BYTES)?;
        BigEndian::write_u16(&mut buf[0..2], self.seconds);
        BigEndian::write_u16(&mut buf[2..4], self.fraction);
        Ok(Self::PACKED_SIZE_BYTES)
    }
}

impl ToBytes for TimestampFormat {
    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, ParseError> {
        ensure_len(buf.len(), Self::PACKED_SIZE_BYTES)?;
        BigEndian::write_u32(&mut buf[0..4], self.seconds);
        BigEndian::write_u32(&mut buf[4..8], self.fraction);
        Ok(Self::PACKED_SIZE_BYTES)
    }
}

impl ToBytes for Packet {
    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, ParseError> {
        ensure_len(buf.len(), Self::PACKED_SIZE_BYTES)?;

        let mut li_vn_mode = 0u8;
        li_vn_mode |= (self.leap_indicator as u8) << 6;
        li_vn_mode |= (self.version.0 & 0b111) << 3;
        li_vn_mode |= self.mode as u8;
        buf[0] = li_vn_mode;
        buf[1] = self.stratum.0;
        buf[2] = self.poll as u8;
        buf[3] = self.precision as u8;

        let mut offset = 4;
        offset += self.root_delay.to_bytes(&mut buf[offset..])?;
        offset += self.root_dispersion.to_bytes(&mut buf[offset..])?;
        buf[offset..offset + 4].copy_from_slice(&self.reference_id);
        offset += 4;
        offset += self.reference_timestamp.to_bytes(&mut buf[offset..])?;
        offset += self.origin_timestamp.to_bytes(&mut buf[offset..])?;
        offset += self.receive_timestamp.to_bytes(&mut buf[offset..])?;
        offset += self.transmit_timestamp.to_bytes(&mut buf[offset..])?;

        Ok(offset)
    }
}
