// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Time output.
//!
//! The panel shows a banner once and then, per reply, a date line
//! (`d/m/yyyy`) and a clock line (`h:m:s`) for UTC and for local time.
//! [`TerminalDisplay`] renders the same content as text lines.

use std::io::{self, Write};

use crate::civil::{CivilTime, WeekdayLabels};

/// Which of the two time readouts is being drawn.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum ScreenRegion {
    /// Decoded UTC time.
    Utc,
    /// UTC shifted by the configured offset.
    Local,
}

impl ScreenRegion {
    /// Short caption for the region.
    pub fn title(self) -> &'static str {
        match self {
            ScreenRegion::Utc => "UTC",
            ScreenRegion::Local => "LOCAL",
        }
    }
}

/// Somewhere to draw the banner and the time readouts.
pub trait TimeDisplay {
    /// Draw the startup banner.
    fn show_banner(&mut self, banner: &str) -> io::Result<()>;

    /// Draw `time` into `region`, replacing what was there.
    fn render_time(&mut self, time: &CivilTime, region: ScreenRegion) -> io::Result<()>;
}

/// [`TimeDisplay`] writing one line per render to any [`Write`].
///
/// ```
/// use clock_client::civil::{WeekdayLabels, to_civil};
/// use clock_client::display::{ScreenRegion, TerminalDisplay, TimeDisplay};
///
/// let mut display = TerminalDisplay::new(Vec::new(), WeekdayLabels::Vietnamese);
/// display.render_time(&to_civil(0), ScreenRegion::Utc).unwrap();
/// let out = String::from_utf8(display.into_inner()).unwrap();
/// assert_eq!(out, "UTC   [T5] 1/1/1970  0:0:0\n");
/// ```
#[derive(Debug)]
pub struct TerminalDisplay<W: Write> {
    writer: W,
    labels: WeekdayLabels,
}

impl<W: Write> TerminalDisplay<W> {
    /// Wrap `writer`, labelling weekdays with `labels`.
    pub fn new(writer: W, labels: WeekdayLabels) -> Self {
        TerminalDisplay { writer, labels }
    }

    /// Borrow the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TimeDisplay for TerminalDisplay<W> {
    fn show_banner(&mut self, banner: &str) -> io::Result<()> {
        writeln!(self.writer, "{banner}")?;
        self.writer.flush()
    }

    fn render_time(&mut self, time: &CivilTime, region: ScreenRegion) -> io::Result<()> {
        writeln!(
            self.writer,
            "{:<5} [{}] {}  {}",
            region.title(),
            self.labels.label(time.weekday),
            time.date_line(),
            time.clock_line()
        )?;
        self.writer.flush()
    }
}
