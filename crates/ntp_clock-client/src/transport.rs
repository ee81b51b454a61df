// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Datagram transport.
//!
//! [`Transport`] is the seam between the driver and whatever moves UDP
//! datagrams: an Ethernet transceiver's socket registers on a board, or a
//! non-blocking [`UdpSocket`] on a host ([`UdpTransport`]).

use log::debug;

use std::io;
use std::net::{SocketAddr, UdpSocket};

/// A connectionless datagram endpoint.
pub trait Transport {
    /// Send one datagram to `dest`. Fire-and-forget.
    fn send_to(&mut self, buf: &[u8], dest: SocketAddr) -> io::Result<()>;

    /// Copy a pending datagram into `buf` without blocking.
    ///
    /// Returns `Ok(None)` when nothing has arrived and `Ok(Some(len))` with
    /// the number of bytes copied otherwise. The sender is not reported.
    fn poll_received(&mut self, buf: &mut [u8]) -> io::Result<Option<usize>>;
}

/// [`Transport`] over a non-blocking [`UdpSocket`] bound to `0.0.0.0`.
#[derive(Debug)]
pub struct UdpTransport {
    sock: UdpSocket,
}

impl UdpTransport {
    /// Bind `0.0.0.0:local_port` and switch the socket to non-blocking mode.
    ///
    /// Port 0 lets the OS pick a free port.
    pub fn bind(local_port: u16) -> io::Result<UdpTransport> {
        let sock = UdpSocket::bind(SocketAddr::from(([0, 0, 0, 0], local_port)))?;
        sock.set_nonblocking(true)?;
        debug!("bound {:?}", sock.local_addr());
        Ok(UdpTransport { sock })
    }

    /// The bound local address.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.sock.local_addr()
    }
}

impl Transport for UdpTransport {
    fn send_to(&mut self, buf: &[u8], dest: SocketAddr) -> io::Result<()> {
        let sz = self.sock.send_to(buf, dest)?;
        debug!("sent: {} bytes to {}", sz, dest);
        Ok(())
    }

    fn poll_received(&mut self, buf: &mut [u8]) -> io::Result<Option<usize>> {
        match self.sock.recv_from(buf) {
            Ok((len, src_addr)) => {
                debug!("recv: {} bytes from {:?}", len, src_addr);
                Ok(Some(len))
            }
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(None),
            Err(e) => Err(e),
        }
    }
}
