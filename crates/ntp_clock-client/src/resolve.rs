// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

use std::net::{SocketAddr, ToSocketAddrs};

use crate::error::ClockError;

/// Turns the configured server host name into a socket address.
pub trait Resolver {
    /// Resolve `host` and attach `port`.
    ///
    /// Failure, including a lookup that yields no addresses, is
    /// [`ClockError::Resolution`].
    fn resolve(&self, host: &str, port: u16) -> Result<SocketAddr, ClockError>;
}

/// [`Resolver`] using the operating system's resolver via [`ToSocketAddrs`].
///
/// IPv4 answers win over IPv6 ones since the transport binds `0.0.0.0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemResolver;

impl Resolver for SystemResolver {
    fn resolve(&self, host: &str, port: u16) -> Result<SocketAddr, ClockError> {
        let addrs: Vec<SocketAddr> = (host, port)
            .to_socket_addrs()
            .map_err(|e| ClockError::Resolution {
                host: host.to_string(),
                source: Some(e),
            })?
            .collect();
        first_preferring_ipv4(addrs).ok_or_else(|| ClockError::Resolution {
            host: host.to_string(),
            source: None,
        })
    }
}

/// First IPv4 address, else the first address of any family.
pub(crate) fn first_preferring_ipv4(addrs: Vec<SocketAddr>) -> Option<SocketAddr> {
    addrs
        .iter()
        .find(|a| a.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_ipv4() {
        let v6: SocketAddr = "[2001:db8::1]:123".parse().unwrap();
        let v4: SocketAddr = "192.0.2.1:123".parse().unwrap();
        assert_eq!(first_preferring_ipv4(vec![v6, v4]), Some(v4));
    }

    #[test]
    fn test_falls_back_to_ipv6() {
        let v6: SocketAddr = "[2001:db8::1]:123".parse().unwrap();
        assert_eq!(first_preferring_ipv4(vec![v6]), Some(v6));
        assert_eq!(first_preferring_ipv4(Vec::new()), None);
    }

    #[test]
    fn test_resolves_ip_literal() {
        let addr = SystemResolver.resolve("127.0.0.1", 123).unwrap();
        assert_eq!(addr, "127.0.0.1:123".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_unresolvable_host() {
        // RFC 6761 reserves `.invalid`; lookups must fail.
        let err = SystemResolver
            .resolve("clock.invalid", 123)
            .unwrap_err();
        match err {
            ClockError::Resolution { host, .. } => assert_eq!(host, "clock.invalid"),
            other => panic!("expected Resolution, got {other:?}"),
        }
    }
}
