// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Poll driver behaviour against scripted peripherals.

mod common;

use std::net::SocketAddr;
use std::time::Duration;

use clock_client::civil::{Weekday, to_civil};
use clock_client::codec::encode_request;
use clock_client::config::ClockConfig;
use clock_client::display::ScreenRegion;
use clock_client::driver::{PollDriver, TickOutcome};
use clock_client::error::{ClockError, ConfigError};

use common::{
    FailingResolver, FixedResolver, ManualClock, MockTransport, NTP_UNIX_EPOCH,
    RecordingDisplay, reply_with,
};

type TestDriver = PollDriver<MockTransport, ManualClock, RecordingDisplay>;

fn server() -> SocketAddr {
    "192.0.2.7:123".parse().unwrap()
}

fn setup(config: ClockConfig) -> (TestDriver, MockTransport, ManualClock, RecordingDisplay) {
    let transport = MockTransport::default();
    let clock = ManualClock::default();
    let display = RecordingDisplay::default();
    let driver = PollDriver::initialize(
        config,
        &FixedResolver(server()),
        transport.clone(),
        clock.clone(),
        display.clone(),
    )
    .unwrap();
    (driver, transport, clock, display)
}

#[test]
fn test_initialize_draws_banner_and_resolves() {
    let (driver, _, _, display) = setup(ClockConfig::default());
    assert_eq!(*display.banners.borrow(), vec!["W5500 STM32 NTP".to_string()]);
    assert_eq!(driver.server(), server());
    assert_eq!(driver.last_send_millis(), 0);
}

#[test]
fn test_initialize_resolution_failure() {
    let result = PollDriver::initialize(
        ClockConfig::default(),
        &FailingResolver,
        MockTransport::default(),
        ManualClock::default(),
        RecordingDisplay::default(),
    );
    match result {
        Err(ClockError::Resolution { host, source }) => {
            assert_eq!(host, "pool.ntp.org");
            assert!(source.is_none());
        }
        Err(e) => panic!("expected Resolution, got {e:?}"),
        Ok(_) => panic!("expected Resolution error"),
    }
}

#[test]
fn test_initialize_rejects_invalid_config() {
    let mut config = ClockConfig::default();
    config.utc_offset_hours = 20;
    let result = PollDriver::initialize(
        config,
        &FixedResolver(server()),
        MockTransport::default(),
        ManualClock::default(),
        RecordingDisplay::default(),
    );
    assert!(matches!(
        result,
        Err(ClockError::Config(ConfigError::UtcOffsetOutOfRange { hours: 20 }))
    ));
}

#[test]
fn test_first_request_after_resend_interval() {
    let (mut driver, transport, _, _) = setup(ClockConfig::default());

    // Ticks at t = 0, 1000, ..., 8000 ms: nothing has exceeded 8000 ms yet.
    for _ in 0..9 {
        assert!(!driver.tick().sent);
    }
    assert_eq!(transport.sent_count(), 0);

    // t = 9000 ms.
    assert!(driver.tick().sent);
    assert_eq!(transport.sent_count(), 1);

    let sent = transport.sent.borrow();
    assert_eq!(sent[0].0.as_slice(), encode_request().as_slice());
    assert_eq!(sent[0].1, server());
}

#[test]
fn test_at_most_one_request_per_interval() {
    let (mut driver, transport, _, _) = setup(ClockConfig::default());
    let mut send_times = Vec::new();
    for _ in 0..60 {
        if driver.tick().sent {
            send_times.push(driver.last_send_millis());
        }
    }
    assert_eq!(transport.sent_count(), send_times.len());
    assert_eq!(send_times, vec![9000, 18_000, 27_000, 36_000, 45_000, 54_000]);
    for pair in send_times.windows(2) {
        assert!(pair[1] - pair[0] > 8000);
    }
}

#[test]
fn test_reply_renders_once_per_injection() {
    let (mut driver, transport, _, display) = setup(ClockConfig::default());

    transport.inject(reply_with(NTP_UNIX_EPOCH));
    assert_eq!(
        driver.tick(),
        TickOutcome {
            sent: false,
            rendered: true
        }
    );

    {
        let frames = display.frames.borrow();
        assert_eq!(frames.len(), 2);

        let (utc, region) = frames[0];
        assert_eq!(region, ScreenRegion::Utc);
        assert_eq!((utc.year, utc.month, utc.day), (1970, 1, 1));
        assert_eq!((utc.hour, utc.minute, utc.second), (0, 0, 0));
        assert_eq!(utc.weekday, Weekday::Thursday);

        let (local, region) = frames[1];
        assert_eq!(region, ScreenRegion::Local);
        assert_eq!((local.year, local.month, local.day), (1970, 1, 1));
        assert_eq!((local.hour, local.minute, local.second), (7, 0, 0));
    }

    // No new reply: the display keeps what it has.
    for _ in 0..5 {
        assert!(!driver.tick().rendered);
    }
    assert_eq!(display.frames.borrow().len(), 2);

    transport.inject(reply_with(NTP_UNIX_EPOCH + 60));
    assert!(driver.tick().rendered);
    assert_eq!(display.frames.borrow().len(), 4);
    assert_eq!(display.frames.borrow()[2].0, to_civil(60));
}

#[test]
fn test_zero_offset_renders_utc_only() {
    let config = ClockConfig::builder().utc_offset_hours(0).build().unwrap();
    let (mut driver, transport, _, display) = setup(config);
    transport.inject(reply_with(NTP_UNIX_EPOCH));
    driver.tick();
    let frames = display.frames.borrow();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].1, ScreenRegion::Utc);
}

#[test]
fn test_negative_offset_rolls_back_a_day() {
    let config = ClockConfig::builder().utc_offset_hours(-5).build().unwrap();
    let (mut driver, transport, _, display) = setup(config);
    // 2024-01-01 02:00:00 UTC.
    transport.inject(reply_with(1_704_074_400u32.wrapping_add(NTP_UNIX_EPOCH)));
    driver.tick();
    let frames = display.frames.borrow();
    let local = frames[1].0;
    assert_eq!((local.year, local.month, local.day), (2023, 12, 31));
    assert_eq!(local.hour, 21);
    assert_eq!(local.weekday, Weekday::Sunday);
}

#[test]
fn test_malformed_reply_renders_nothing() {
    let (mut driver, transport, _, display) = setup(ClockConfig::default());
    transport.inject(vec![0x24; 20]);
    transport.inject(Vec::new());
    assert!(!driver.tick().rendered);
    assert!(!driver.tick().rendered);
    assert!(display.frames.borrow().is_empty());

    // The loop keeps going and picks up the next good reply.
    transport.inject(reply_with(NTP_UNIX_EPOCH));
    assert!(driver.tick().rendered);
}

#[test]
fn test_44_byte_reply_is_enough() {
    let (mut driver, transport, _, display) = setup(ClockConfig::default());
    let mut reply = reply_with(NTP_UNIX_EPOCH);
    reply.truncate(44);
    transport.inject(reply);
    assert!(driver.tick().rendered);
    assert_eq!(display.frames.borrow()[0].0, to_civil(0));
}

#[test]
fn test_tick_sleeps_poll_interval() {
    let config = ClockConfig::builder()
        .poll_interval(Duration::from_millis(250))
        .build()
        .unwrap();
    let (mut driver, _, clock, _) = setup(config);
    for _ in 0..4 {
        driver.tick();
    }
    assert_eq!(clock.now.get(), 1000);
}
