//! Async UDP socket abstraction.
//!
//! [`Socket`] is a thin wrapper around `tokio::net::UdpSocket` that speaks
//! [`InboundDatagram`] instead of raw buffers.  All reply logic lives
//! elsewhere; this module owns only byte I/O.

use std::io;
use std::net::SocketAddr;

use tokio::net::UdpSocket;

/// Capture limit per datagram.  A UDP datagram carried in a single IP frame
/// on standard Ethernet cannot exceed this; anything longer is truncated by
/// the receive call.
pub const MAX_DATAGRAM: usize = 1500;

/// One received datagram, alive for a single receive/reply cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundDatagram {
    /// Address and port the datagram came from; the reply goes back here.
    pub source: SocketAddr,
    /// Raw body, at most [`MAX_DATAGRAM`] bytes.  Content is ignored.
    pub payload: Vec<u8>,
}

/// An async, datagram-oriented UDP socket.
///
/// All methods are `&self` so the socket could be shared across tasks,
/// though each responder owns its socket exclusively.
#[derive(Debug)]
pub struct Socket {
    /// Address this socket is bound to (filled in after OS assigns ephemeral port).
    pub local_addr: SocketAddr,
    inner: UdpSocket,
}

impl Socket {
    /// Bind a new socket to `local_addr`.
    ///
    /// Passing port `0` lets the OS choose an ephemeral port.
    pub async fn bind(local_addr: SocketAddr) -> io::Result<Self> {
        let inner = UdpSocket::bind(local_addr).await?;
        let local_addr = inner.local_addr()?;
        Ok(Self { local_addr, inner })
    }

    /// Receive the next datagram, truncated to [`MAX_DATAGRAM`] bytes.
    pub async fn recv_datagram(&self) -> io::Result<InboundDatagram> {
        let mut buf = vec![0u8; MAX_DATAGRAM];
        let (n, source) = self.inner.recv_from(&mut buf).await?;
        buf.truncate(n);
        Ok(InboundDatagram {
            source,
            payload: buf,
        })
    }

    /// Send `bytes` as a single UDP datagram to `dest`.
    pub async fn send_to(&self, bytes: &[u8], dest: SocketAddr) -> io::Result<()> {
        self.inner.send_to(bytes, dest).await?;
        Ok(())
    }
}
