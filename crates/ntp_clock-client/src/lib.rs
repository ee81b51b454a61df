// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

/*!
Polling NTP display clock.

Every few seconds a fixed request goes out to the configured NTP server;
every iteration the driver checks for a reply and, when one has arrived,
shows the decoded UTC time and the zone-adjusted local time on a display.

The peripherals are traits so the same [`driver::PollDriver`] runs against
a `std::net::UdpSocket` and a terminal on a host, or against an Ethernet
transceiver and a TFT panel on a board.

# Example

```rust,no_run
use clock_client::clock::SystemClock;
use clock_client::config::ClockConfig;
use clock_client::display::TerminalDisplay;
use clock_client::driver::PollDriver;
use clock_client::resolve::SystemResolver;
use clock_client::transport::UdpTransport;

fn main() -> Result<(), clock_client::error::ClockError> {
    let config = ClockConfig::default();
    let transport = UdpTransport::bind(config.local_port)?;
    let display = TerminalDisplay::new(std::io::stdout(), config.weekday_labels);
    let mut driver = PollDriver::initialize(
        config,
        &SystemResolver,
        transport,
        SystemClock::new(),
        display,
    )?;
    driver.run()
}
```
*/

#![deny(unsafe_code)]
#![warn(missing_docs)]

// Re-export the codec for convenience.
pub use clock_proto::{civil, codec, protocol, unix_time};

/// Error types for initialization and the poll loop.
pub mod error;

/// Clock configuration: server, offset, ports and intervals.
pub mod config;

/// Monotonic millisecond clock and delay.
pub mod clock;

/// Non-blocking UDP transport.
pub mod transport;

/// Host name resolution for the NTP server.
pub mod resolve;

/// Output of rendered civil time.
pub mod display;

/// The fixed-cadence send/poll/render loop.
pub mod driver;

pub use config::ClockConfig;
pub use driver::{PollDriver, TickOutcome};
pub use error::ClockError;
