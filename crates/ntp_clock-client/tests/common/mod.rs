// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Shared helpers for integration tests.

// Integration test helpers are `pub` so each `tests/*.rs` file can import them
// via `mod common`, but clippy flags them as unreachable outside the crate.
#![allow(unreachable_pub, dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io;
use std::net::SocketAddr;
use std::rc::Rc;
use std::time::Duration;

use clock_client::civil::CivilTime;
use clock_client::clock::MonotonicClock;
use clock_client::display::{ScreenRegion, TimeDisplay};
use clock_client::error::ClockError;
use clock_client::resolve::Resolver;
use clock_client::transport::Transport;

/// NTP seconds for 1970-01-01 00:00:00 UTC.
pub const NTP_UNIX_EPOCH: u32 = 0x83AA_7E80;

/// A 48-byte server reply carrying `ntp_seconds` as its transmit seconds.
pub fn reply_with(ntp_seconds: u32) -> Vec<u8> {
    let mut reply = vec![0u8; 48];
    reply[0] = 0x24; // LI 0, version 4, server
    reply[1] = 1;
    reply[40..44].copy_from_slice(&ntp_seconds.to_be_bytes());
    reply
}

/// Transport whose inbox and outbox are shared with the test.
#[derive(Clone, Default)]
pub struct MockTransport {
    pub sent: Rc<RefCell<Vec<(Vec<u8>, SocketAddr)>>>,
    pub inbox: Rc<RefCell<VecDeque<Vec<u8>>>>,
}

impl MockTransport {
    pub fn inject(&self, datagram: Vec<u8>) {
        self.inbox.borrow_mut().push_back(datagram);
    }

    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl Transport for MockTransport {
    fn send_to(&mut self, buf: &[u8], dest: SocketAddr) -> io::Result<()> {
        self.sent.borrow_mut().push((buf.to_vec(), dest));
        Ok(())
    }

    fn poll_received(&mut self, buf: &mut [u8]) -> io::Result<Option<usize>> {
        Ok(self.inbox.borrow_mut().pop_front().map(|d| {
            let n = d.len().min(buf.len());
            buf[..n].copy_from_slice(&d[..n]);
            n
        }))
    }
}

/// Clock that only moves when the driver sleeps or the test advances it.
#[derive(Clone, Default)]
pub struct ManualClock {
    pub now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get().wrapping_add(millis));
    }
}

impl MonotonicClock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }

    fn sleep(&mut self, duration: Duration) {
        self.advance(duration.as_millis() as u64);
    }
}

/// Display recording everything drawn on it.
#[derive(Clone, Default)]
pub struct RecordingDisplay {
    pub banners: Rc<RefCell<Vec<String>>>,
    pub frames: Rc<RefCell<Vec<(CivilTime, ScreenRegion)>>>,
}

impl TimeDisplay for RecordingDisplay {
    fn show_banner(&mut self, banner: &str) -> io::Result<()> {
        self.banners.borrow_mut().push(banner.to_string());
        Ok(())
    }

    fn render_time(&mut self, time: &CivilTime, region: ScreenRegion) -> io::Result<()> {
        self.frames.borrow_mut().push((*time, region));
        Ok(())
    }
}

/// Resolver answering every lookup with a fixed address.
pub struct FixedResolver(pub SocketAddr);

impl Resolver for FixedResolver {
    fn resolve(&self, _host: &str, port: u16) -> Result<SocketAddr, ClockError> {
        Ok(SocketAddr::new(self.0.ip(), port))
    }
}

/// Resolver that always fails.
pub struct FailingResolver;

impl Resolver for FailingResolver {
    fn resolve(&self, host: &str, _port: u16) -> Result<SocketAddr, ClockError> {
        Err(ClockError::Resolution {
            host: host.to_string(),
            source: None,
        })
    }
}
