// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

// NTP display clock
//
// Polls an NTP server every few seconds and prints UTC and local time to the
// terminal whenever a reply arrives.
//
// Usage:
//   cargo run -p ntp_clock-client --bin ntp-clock
//
// Environment:
//   NTP_CLOCK_SERVER          server host name (default pool.ntp.org)
//   NTP_CLOCK_UTC_OFFSET      local offset in hours, -12..=14 (default 7)
//   NTP_CLOCK_LOCAL_PORT      local UDP port (default 8888)
//   NTP_CLOCK_WEEKDAY_LABELS  english or vietnamese (default english)
//   RUST_LOG                  log filter (default info)

use std::process::ExitCode;

use clock_client::clock::SystemClock;
use clock_client::config::ClockConfig;
use clock_client::display::TerminalDisplay;
use clock_client::driver::PollDriver;
use clock_client::error::ClockError;
use clock_client::resolve::SystemResolver;
use clock_client::transport::UdpTransport;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match start() {
        Ok(mut driver) => driver.run(),
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn start()
-> Result<PollDriver<UdpTransport, SystemClock, TerminalDisplay<std::io::Stdout>>, ClockError> {
    let config = ClockConfig::from_env()?;
    let transport = UdpTransport::bind(config.local_port)?;
    let display = TerminalDisplay::new(std::io::stdout(), config.weekday_labels);
    PollDriver::initialize(
        config,
        &SystemResolver,
        transport,
        SystemClock::new(),
        display,
    )
}
