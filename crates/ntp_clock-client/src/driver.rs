// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! The send/poll/render loop.
//!
//! Each [`tick`](PollDriver::tick):
//!
//! 1. reads the millisecond clock;
//! 2. sends a fresh request if more than the resend interval has passed
//!    since the previous one;
//! 3. checks for a reply without blocking and, if one is there, renders UTC
//!    and (for a non-zero offset) local time;
//! 4. sleeps for the poll interval.
//!
//! Requests and replies are not correlated: any datagram of at least 44
//! bytes that shows up on the transport is taken as the answer. Only
//! [`initialize`](PollDriver::initialize) can fail; errors inside the loop
//! are logged and the loop carries on.

use log::{debug, info, warn};

use std::net::SocketAddr;

use crate::civil::to_civil;
use crate::clock::MonotonicClock;
use crate::codec::{decode_reply, decode_reply_checked, encode_request};
use crate::config::ClockConfig;
use crate::display::{ScreenRegion, TimeDisplay};
use crate::error::ClockError;
use crate::protocol::{FromBytes, PACKET_SIZE, Packet};
use crate::resolve::Resolver;
use crate::transport::Transport;
use crate::unix_time::apply_offset;

/// What happened during one [`PollDriver::tick`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct TickOutcome {
    /// A request was handed to the transport (even if sending failed).
    pub sent: bool,
    /// A reply was decoded and rendered.
    pub rendered: bool,
}

/// Owns the peripherals and runs the clock loop.
#[derive(Debug)]
pub struct PollDriver<T, C, D> {
    config: ClockConfig,
    server: SocketAddr,
    transport: T,
    clock: C,
    display: D,
    last_send_millis: u64,
}

impl<T, C, D> PollDriver<T, C, D>
where
    T: Transport,
    C: MonotonicClock,
    D: TimeDisplay,
{
    /// Assemble a driver for an already resolved server address.
    ///
    /// No I/O happens here; the banner is not drawn.
    pub fn new(config: ClockConfig, server: SocketAddr, transport: T, clock: C, display: D) -> Self {
        PollDriver {
            config,
            server,
            transport,
            clock,
            display,
            last_send_millis: 0,
        }
    }

    /// Validate `config`, draw the banner and resolve the server.
    ///
    /// A banner that fails to draw is logged and ignored. An unresolvable
    /// server is returned as [`ClockError::Resolution`]; nothing is retried.
    pub fn initialize<R: Resolver + ?Sized>(
        config: ClockConfig,
        resolver: &R,
        transport: T,
        clock: C,
        mut display: D,
    ) -> Result<Self, ClockError> {
        config.validate()?;

        if let Err(e) = display.show_banner(&config.banner) {
            warn!("failed to draw banner: {}", e);
        }

        let server = resolver.resolve(&config.server_host, config.server_port)?;
        info!(
            "NTP server {} resolved to {}; UTC offset {}h",
            config.server_label(),
            server,
            config.utc_offset_hours
        );

        Ok(PollDriver::new(config, server, transport, clock, display))
    }

    /// Send a request if the resend interval has elapsed.
    ///
    /// Returns whether a send was attempted. The timestamp is recorded before
    /// sending, so a failed send still waits out a full interval.
    pub fn maybe_send(&mut self, now_millis: u64) -> bool {
        let interval = self.config.resend_interval.as_millis() as u64;
        if now_millis.wrapping_sub(self.last_send_millis) <= interval {
            return false;
        }
        self.last_send_millis = now_millis;

        let request = encode_request();
        match self.transport.send_to(&request, self.server) {
            Ok(()) => debug!("request sent to {} at {} ms", self.server, now_millis),
            Err(e) => warn!("failed to send request to {}: {}", self.server, e),
        }
        true
    }

    /// Check for a reply and render it.
    ///
    /// `Ok(false)` means nothing had arrived. Decode and render failures
    /// are returned; the caller decides whether they matter.
    pub fn poll_reply(&mut self) -> Result<bool, ClockError> {
        let mut buf = [0u8; PACKET_SIZE];
        let len = match self.transport.poll_received(&mut buf)? {
            Some(len) => len.min(buf.len()),
            None => return Ok(false),
        };
        let reply = &buf[..len];

        if let Ok((header, _)) = Packet::from_bytes(reply) {
            debug!(
                "reply: mode {:?}, stratum {}, version {}",
                header.mode,
                header.stratum.0,
                header.version.value()
            );
        }

        let epoch = if self.config.reject_pre_unix_epoch {
            decode_reply_checked(reply)?
        } else {
            decode_reply(reply)?
        };
        self.render(epoch)?;
        Ok(true)
    }

    /// Draw `epoch_seconds` as UTC and, for a non-zero offset, as local time.
    pub fn render(&mut self, epoch_seconds: u32) -> Result<(), ClockError> {
        let utc = to_civil(epoch_seconds);
        self.display.render_time(&utc, ScreenRegion::Utc)?;
        info!("UTC {} ({})", utc, utc.weekday);

        let offset = self.config.utc_offset_hours;
        if offset != 0 {
            let local = to_civil(apply_offset(epoch_seconds, offset));
            self.display.render_time(&local, ScreenRegion::Local)?;
            info!("UTC{:+} {} ({})", offset, local, local.weekday);
        }
        Ok(())
    }

    /// One loop iteration: maybe send, poll, maybe render, sleep.
    pub fn tick(&mut self) -> TickOutcome {
        let now = self.clock.now_millis();
        let sent = self.maybe_send(now);

        let rendered = match self.poll_reply() {
            Ok(rendered) => rendered,
            Err(ClockError::Parse(e)) => {
                warn!("discarding reply: {}", e);
                false
            }
            Err(e) => {
                warn!("receive/render failed: {}", e);
                false
            }
        };

        self.clock.sleep(self.config.poll_interval);
        TickOutcome { sent, rendered }
    }

    /// Tick forever.
    pub fn run(&mut self) -> ! {
        info!(
            "polling {} every {:?}, resending after {:?}",
            self.server, self.config.poll_interval, self.config.resend_interval
        );
        loop {
            self.tick();
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// The resolved server address.
    pub fn server(&self) -> SocketAddr {
        self.server
    }

    /// Clock reading at the last send attempt (0 before the first).
    pub fn last_send_millis(&self) -> u64 {
        self.last_send_millis
    }

    /// Borrow the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Borrow the display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Give back the peripherals.
    pub fn into_parts(self) -> (T, C, D) {
        (self.transport, self.clock, self.display)
    }
}
