// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Calendar fields from Unix epoch seconds.
//!
//! The date arithmetic is the days-to-civil algorithm over the proleptic
//! Gregorian calendar, working in 400-year eras of 146 097 days. Leap
//! seconds are not represented: every day is 86 400 seconds long.

use core::fmt;

use crate::unix_time::{SECONDS_PER_DAY, weekday_index};

// Days from 0000-03-01 to 1970-01-01.
const DAYS_TO_UNIX_EPOCH: u32 = 719_468;
const DAYS_PER_ERA: u32 = 146_097;

/// Day of the week.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Weekday {
    /// Sunday (0).
    Sunday = 0,
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
}

impl Weekday {
    /// Weekday for an index in `0..=6`, Sunday first.
    pub fn from_index(index: u8) -> Option<Weekday> {
        match index {
            0 => Some(Weekday::Sunday),
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            _ => None,
        }
    }

    /// Index of this weekday, Sunday = 0.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Three-letter English abbreviation.
    pub fn short_name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sun",
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
        }
    }

    /// Vietnamese short label: `CN` (Chủ nhật) for Sunday, `T2`..`T7` for
    /// Monday through Saturday.
    pub fn vietnamese_label(self) -> &'static str {
        match self {
            Weekday::Sunday => "CN",
            Weekday::Monday => "T2",
            Weekday::Tuesday => "T3",
            Weekday::Wednesday => "T4",
            Weekday::Thursday => "T5",
            Weekday::Friday => "T6",
            Weekday::Saturday => "T7",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Which label set to use when rendering weekdays.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum WeekdayLabels {
    /// `Sun`, `Mon`, ...
    #[default]
    English,
    /// `CN`, `T2`, ...
    Vietnamese,
}

impl WeekdayLabels {
    /// Label for `weekday` in this label set.
    pub fn label(self, weekday: Weekday) -> &'static str {
        match self {
            WeekdayLabels::English => weekday.short_name(),
            WeekdayLabels::Vietnamese => weekday.vietnamese_label(),
        }
    }
}

/// A broken-down calendar date and time of day.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct CivilTime {
    /// Calendar year, e.g. 2024.
    pub year: u16,
    /// Month, 1-12.
    pub month: u8,
    /// Day of month, 1-31.
    pub day: u8,
    /// Hour, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
    /// Day of the week.
    pub weekday: Weekday,
}

impl CivilTime {
    /// Date as the clock face shows it: `d/m/yyyy`, no zero padding.
    pub fn date_line(&self) -> DateLine {
        DateLine(*self)
    }

    /// Time of day as the clock face shows it: `h:m:s`, no zero padding.
    pub fn clock_line(&self) -> ClockLine {
        ClockLine(*self)
    }
}

impl fmt::Display for CivilTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Displays a [`CivilTime`] as `d/m/yyyy`.
#[derive(Copy, Clone, Debug)]
pub struct DateLine(CivilTime);

impl fmt::Display for DateLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.0.day, self.0.month, self.0.year)
    }
}

/// Displays a [`CivilTime`] as `h:m:s`.
#[derive(Copy, Clone, Debug)]
pub struct ClockLine(CivilTime);

impl fmt::Display for ClockLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.0.hour, self.0.minute, self.0.second)
    }
}

/// Decompose Unix epoch seconds into calendar fields.
///
/// `to_civil(0)` is 1970-01-01 00:00:00, a Thursday. The weekday comes from
/// [`weekday_index`], so the two always agree.
pub fn to_civil(epoch_seconds: u32) -> CivilTime {
    let days = epoch_seconds / SECONDS_PER_DAY;
    let secs_of_day = epoch_seconds % SECONDS_PER_DAY;

    let (year, month, day) = civil_from_days(days);

    // weekday_index is always in 0..=6.
    let weekday = Weekday::from_index(weekday_index(epoch_seconds)).unwrap_or(Weekday::Sunday);

    CivilTime {
        year,
        month,
        day,
        hour: (secs_of_day / 3_600) as u8,
        minute: (secs_of_day / 60 % 60) as u8,
        second: (secs_of_day % 60) as u8,
        weekday,
    }
}

// Days since 1970-01-01 to (year, month, day). Shifting the year to start
// in March puts the leap day at the end of the year.
fn civil_from_days(days: u32) -> (u16, u8, u8) {
    let z = days + DAYS_TO_UNIX_EPOCH;
    let era = z / DAYS_PER_ERA;
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + u32::from(month <= 2);
    (year as u16, month as u8, day as u8)
}
