// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Clock configuration.
//!
//! [`ClockConfig::default()`] reproduces the firmware constants: server
//! `pool.ntp.org:123`, UTC+7, local port 8888, a request every 8 s and a
//! receive check every second. Values can be overridden through
//! [`ClockConfig::builder()`] or the `NTP_CLOCK_*` environment variables read
//! by [`ClockConfig::from_env()`].
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use clock_client::config::ClockConfig;
//!
//! let config = ClockConfig::builder()
//!     .server("time.nist.gov")
//!     .utc_offset_hours(-5)
//!     .poll_interval(Duration::from_millis(500))
//!     .build()
//!     .unwrap();
//! assert_eq!(config.server_port, 123);
//! ```

use std::env;
use std::time::Duration;

use crate::civil::WeekdayLabels;
use crate::error::ConfigError;
use crate::protocol;

/// Default NTP server host name.
pub const DEFAULT_SERVER: &str = "pool.ntp.org";
/// Default offset of the local display from UTC, in hours.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 7;
/// Default local UDP port.
pub const DEFAULT_LOCAL_PORT: u16 = 8888;
/// Default minimum spacing between requests.
pub const DEFAULT_RESEND_INTERVAL: Duration = Duration::from_millis(8000);
/// Default delay between loop iterations.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);
/// Default startup banner.
pub const DEFAULT_BANNER: &str = "W5500 STM32 NTP";

/// Smallest accepted UTC offset (hours).
pub const MIN_UTC_OFFSET_HOURS: i32 = -12;
/// Largest accepted UTC offset (hours).
pub const MAX_UTC_OFFSET_HOURS: i32 = 14;

/// Environment variable overriding [`ClockConfig::server_host`].
pub const ENV_SERVER: &str = "NTP_CLOCK_SERVER";
/// Environment variable overriding [`ClockConfig::utc_offset_hours`].
pub const ENV_UTC_OFFSET: &str = "NTP_CLOCK_UTC_OFFSET";
/// Environment variable overriding [`ClockConfig::local_port`].
pub const ENV_LOCAL_PORT: &str = "NTP_CLOCK_LOCAL_PORT";
/// Environment variable selecting [`ClockConfig::weekday_labels`]
/// (`english` or `vietnamese`).
pub const ENV_WEEKDAY_LABELS: &str = "NTP_CLOCK_WEEKDAY_LABELS";

/// Configuration for a [`PollDriver`](crate::driver::PollDriver).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClockConfig {
    /// NTP server host name, resolved once at initialization.
    pub server_host: String,
    /// NTP server UDP port.
    pub server_port: u16,
    /// Local UDP port the transport binds to.
    pub local_port: u16,
    /// Offset of the local display from UTC, in whole hours.
    pub utc_offset_hours: i32,
    /// A request is sent only once more than this has elapsed since the last.
    pub resend_interval: Duration,
    /// Delay at the end of every loop iteration.
    pub poll_interval: Duration,
    /// Weekday labels used by the display.
    pub weekday_labels: WeekdayLabels,
    /// Treat transmit timestamps before 1970 as malformed instead of
    /// letting them wrap.
    pub reject_pre_unix_epoch: bool,
    /// Text shown once at startup.
    pub banner: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig {
            server_host: DEFAULT_SERVER.to_string(),
            server_port: protocol::PORT,
            local_port: DEFAULT_LOCAL_PORT,
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
            resend_interval: DEFAULT_RESEND_INTERVAL,
            poll_interval: DEFAULT_POLL_INTERVAL,
            weekday_labels: WeekdayLabels::default(),
            reject_pre_unix_epoch: false,
            banner: DEFAULT_BANNER.to_string(),
        }
    }
}

impl ClockConfig {
    /// Start a builder seeded with the defaults.
    pub fn builder() -> ClockConfigBuilder {
        ClockConfigBuilder {
            config: ClockConfig::default(),
        }
    }

    /// Check the invariants the driver relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server_host.trim().is_empty() {
            return Err(ConfigError::EmptyServerHost);
        }
        if !(MIN_UTC_OFFSET_HOURS..=MAX_UTC_OFFSET_HOURS).contains(&self.utc_offset_hours) {
            return Err(ConfigError::UtcOffsetOutOfRange {
                hours: self.utc_offset_hours,
            });
        }
        if self.resend_interval.is_zero() {
            return Err(ConfigError::ZeroInterval {
                name: "resend interval",
            });
        }
        if self.poll_interval.is_zero() {
            return Err(ConfigError::ZeroInterval {
                name: "poll interval",
            });
        }
        Ok(())
    }

    /// Defaults overridden by the `NTP_CLOCK_*` environment variables.
    ///
    /// Unset variables keep their defaults; set but unparseable ones are an
    /// error. The result is validated.
    pub fn from_env() -> Result<ClockConfig, ConfigError> {
        ClockConfig::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but reading variables through
    /// `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<ClockConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ClockConfig::default();

        if let Some(host) = lookup(ENV_SERVER) {
            config.server_host = host.trim().to_string();
        }
        if let Some(value) = lookup(ENV_UTC_OFFSET) {
            config.utc_offset_hours = parse_var(ENV_UTC_OFFSET, &value)?;
        }
        if let Some(value) = lookup(ENV_LOCAL_PORT) {
            config.local_port = parse_var(ENV_LOCAL_PORT, &value)?;
        }
        if let Some(value) = lookup(ENV_WEEKDAY_LABELS) {
            config.weekday_labels = parse_labels(&value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// The NTP server as `host:port`, for log messages.
    pub fn server_label(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_var<T: std::str::FromStr>(variable: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            variable,
            value: value.to_string(),
        })
}

fn parse_labels(value: &str) -> Result<WeekdayLabels, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "english" | "en" => Ok(WeekdayLabels::English),
        "vietnamese" | "vi" => Ok(WeekdayLabels::Vietnamese),
        _ => Err(ConfigError::InvalidValue {
            variable: ENV_WEEKDAY_LABELS,
            value: value.to_string(),
        }),
    }
}

/// Builder for [`ClockConfig`].
#[derive(Clone, Debug)]
pub struct ClockConfigBuilder {
    config: ClockConfig,
}

impl ClockConfigBuilder {
    /// Set the NTP server host name.
    pub fn server(mut self, host: impl Into<String>) -> Self {
        self.config.server_host = host.into();
        self
    }

    /// Set the NTP server port (default: 123).
    pub fn server_port(mut self, port: u16) -> Self {
        self.config.server_port = port;
        self
    }

    /// Set the local UDP port (default: 8888). Port 0 lets the OS choose.
    pub fn local_port(mut self, port: u16) -> Self {
        self.config.local_port = port;
        self
    }

    /// Set the local display's offset from UTC, in hours (default: 7).
    ///
    /// A zero offset suppresses the local-time region.
    pub fn utc_offset_hours(mut self, hours: i32) -> Self {
        self.config.utc_offset_hours = hours;
        self
    }

    /// Set the minimum spacing between requests (default: 8 s).
    pub fn resend_interval(mut self, interval: Duration) -> Self {
        self.config.resend_interval = interval;
        self
    }

    /// Set the delay between loop iterations (default: 1 s).
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.config.poll_interval = interval;
        self
    }

    /// Select the weekday labels.
    pub fn weekday_labels(mut self, labels: WeekdayLabels) -> Self {
        self.config.weekday_labels = labels;
        self
    }

    /// Reject replies whose transmit time precedes 1970.
    pub fn reject_pre_unix_epoch(mut self, reject: bool) -> Self {
        self.config.reject_pre_unix_epoch = reject;
        self
    }

    /// Set the startup banner.
    pub fn banner(mut self, banner: impl Into<String>) -> Self {
        self.config.banner = banner.into();
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<ClockConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
