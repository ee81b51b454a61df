// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

/// The number of seconds from 1st January 1900 UTC to the start of the Unix epoch.
pub const EPOCH_DELTA: u32 = 2_208_988_800;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: i64 = 3_600;

// 1970-01-01 was a Thursday; weekday indices count from Sunday = 0.
const EPOCH_WEEKDAY: u32 = 4;

/// Convert NTP seconds (since 1900) to Unix seconds (since 1970).
///
/// Uses wrapping arithmetic: a value before 1970 wraps to a large number
/// instead of failing. Use [`ntp_to_unix_checked`] to reject those.
pub fn ntp_to_unix(ntp_seconds: u32) -> u32 {
    ntp_seconds.wrapping_sub(EPOCH_DELTA)
}

/// Convert NTP seconds to Unix seconds, or `None` for instants before 1970.
pub fn ntp_to_unix_checked(ntp_seconds: u32) -> Option<u32> {
    ntp_seconds.checked_sub(EPOCH_DELTA)
}

/// Shift a Unix timestamp by a whole number of hours.
///
/// The shift wraps within `u32`, mirroring the unsigned arithmetic of the
/// timestamp itself. Negative offsets move the timestamp backwards.
pub fn apply_offset(epoch_seconds: u32, offset_hours: i32) -> u32 {
    let shift = i64::from(offset_hours) * SECONDS_PER_HOUR;
    (i64::from(epoch_seconds) + shift) as u32
}

/// Day of the week for a Unix timestamp, 0 = Sunday through 6 = Saturday.
pub fn weekday_index(epoch_seconds: u32) -> u8 {
    ((epoch_seconds / SECONDS_PER_DAY + EPOCH_WEEKDAY) % 7) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ntp_to_unix_at_epoch() {
        assert_eq!(ntp_to_unix(EPOCH_DELTA), 0);
        assert_eq!(ntp_to_unix_checked(EPOCH_DELTA), Some(0));
    }

    #[test]
    fn ntp_to_unix_wraps_before_epoch() {
        assert_eq!(ntp_to_unix(EPOCH_DELTA - 1), u32::MAX);
        assert_eq!(ntp_to_unix_checked(EPOCH_DELTA - 1), None);
    }

    #[test]
    fn ntp_to_unix_2024() {
        // 2024-01-01 00:00:00 UTC: Unix=1704067200, NTP=3913056000
        assert_eq!(ntp_to_unix(3_913_056_000), 1_704_067_200);
    }

    #[test]
    fn apply_offset_positive_and_negative() {
        assert_eq!(apply_offset(1_000, 7), 1_000 + 25_200);
        assert_eq!(apply_offset(30_000, -5), 30_000 - 18_000);
        assert_eq!(apply_offset(1_000, 0), 1_000);
    }

    #[test]
    fn apply_offset_wraps() {
        assert_eq!(apply_offset(0, -1), u32::MAX - 3_599);
        assert_eq!(apply_offset(u32::MAX, 1), 3_599);
    }

    #[test]
    fn weekday_index_epoch_is_thursday() {
        assert_eq!(weekday_index(0), 4);
        assert_eq!(weekday_index(SECONDS_PER_DAY - 1), 4);
        assert_eq!(weekday_index(SECONDS_PER_DAY), 5);
        assert_eq!(weekday_index(3 * SECONDS_PER_DAY), 0);
    }

    #[test]
    fn weekday_index_2024_new_year_is_monday() {
        assert_eq!(weekday_index(1_704_067_200), 1);
    }
}
