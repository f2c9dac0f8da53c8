//! Per-port responder.
//!
//! A [`PortResponder`] owns one bound UDP socket and services exactly one
//! port for the process lifetime.  Its responsibilities are:
//! - Blocking on the socket until a datagram arrives.
//! - Building the reply (sender IP + UNIX timestamp, octet-encoded) via
//!   [`crate::encode`].
//! - Sending the reply back to the originating address and port.
//!
//! The serve loop is strictly serial: one datagram is fully answered before
//! the next receive, so same-port datagrams are processed in arrival order.
//! Concurrency across ports comes from running one responder task per port;
//! responders share no state with each other.
//!
//! On any I/O failure the loop returns the error to its caller instead of
//! exiting the process; the shutdown policy belongs to the orchestrator in
//! `main`.

use std::convert::Infallible;
use std::net::SocketAddr;

use crate::clock::Clock;
use crate::config::ListenerConfig;
use crate::encode::ReplyPayload;
use crate::error::ResponderError;
use crate::socket::{InboundDatagram, Socket};

/// One port's listener: a bound socket plus the immutable process config.
#[derive(Debug)]
pub struct PortResponder<C> {
    socket: Socket,
    config: ListenerConfig,
    clock: C,
}

impl<C: Clock> PortResponder<C> {
    /// Acquire an exclusive UDP socket on `port` (all interfaces).
    ///
    /// Port `0` asks the OS for an ephemeral port, which the loopback tests
    /// rely on; real deployments bind the configured interval.
    pub async fn bind(
        port: u16,
        config: ListenerConfig,
        clock: C,
    ) -> Result<Self, ResponderError> {
        let socket = Socket::bind(SocketAddr::from(([0, 0, 0, 0], port)))
            .await
            .map_err(|source| ResponderError::Bind { port, source })?;
        Ok(Self {
            socket,
            config,
            clock,
        })
    }

    /// The address this responder actually bound.
    pub fn local_addr(&self) -> SocketAddr {
        self.socket.local_addr
    }

    fn port(&self) -> u16 {
        self.socket.local_addr.port()
    }

    /// Block until the next datagram arrives on this port.
    pub async fn receive(&self) -> Result<InboundDatagram, ResponderError> {
        let datagram = self
            .socket
            .recv_datagram()
            .await
            .map_err(|source| ResponderError::Receive {
                port: self.port(),
                source,
            })?;

        if self.config.debug {
            log::info!(
                "[{}] ← {} byte(s) from {}: {}",
                self.port(),
                datagram.payload.len(),
                datagram.source,
                String::from_utf8_lossy(&datagram.payload)
            );
        }
        Ok(datagram)
    }

    /// Build the reply for `datagram` from its source address and the
    /// current clock reading.  Pure aside from reading the clock.
    pub fn build_reply(&self, datagram: &InboundDatagram) -> ReplyPayload {
        let ip = datagram.source.ip().to_string();
        ReplyPayload::build(&ip, self.clock.unix_seconds())
    }

    /// Transmit `reply` back to `dest` as one datagram.
    pub async fn send(&self, reply: &ReplyPayload, dest: SocketAddr) -> Result<(), ResponderError> {
        self.socket
            .send_to(reply.encoded.as_bytes(), dest)
            .await
            .map_err(|source| ResponderError::Send {
                port: self.port(),
                source,
            })?;

        if self.config.debug {
            log::info!(
                "[{}] → {}\nSent data:\n{}\nEncoded as:\n{}",
                self.port(),
                dest,
                reply.plain,
                reply.encoded
            );
        }
        Ok(())
    }

    /// Serve forever: receive → build reply → send.
    ///
    /// Only ever returns on an I/O failure, hence the `Infallible` success
    /// type.
    pub async fn run(self) -> Result<Infallible, ResponderError> {
        loop {
            let datagram = self.receive().await?;
            let reply = self.build_reply(&datagram);
            self.send(&reply, datagram.source).await?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::encode::decode_octets;

    async fn ephemeral(debug: bool) -> PortResponder<FixedClock> {
        let config = ListenerConfig::new(0, 0, debug).unwrap();
        PortResponder::bind(0, config, FixedClock(1_700_000_000))
            .await
            .expect("bind failed")
    }

    #[tokio::test]
    async fn bind_assigns_a_real_port() {
        let responder = ephemeral(false).await;
        assert_ne!(responder.local_addr().port(), 0);
    }

    #[tokio::test]
    async fn build_reply_uses_sender_ip_and_clock() {
        let responder = ephemeral(false).await;
        let datagram = InboundDatagram {
            source: "198.51.100.7:40000".parse().unwrap(),
            payload: b"ignored".to_vec(),
        };

        let reply = responder.build_reply(&datagram);
        assert_eq!(reply.plain, "198.51.100.71700000000");
        assert_eq!(decode_octets(&reply.encoded).unwrap(), reply.plain.as_bytes());
    }

    #[tokio::test]
    async fn reply_ignores_datagram_content() {
        let responder = ephemeral(false).await;
        let source: SocketAddr = "192.0.2.1:5555".parse().unwrap();
        let a = InboundDatagram {
            source,
            payload: vec![0u8; 1500],
        };
        let b = InboundDatagram {
            source,
            payload: Vec::new(),
        };
        assert_eq!(responder.build_reply(&a), responder.build_reply(&b));
    }

    #[tokio::test]
    async fn binding_an_occupied_port_fails() {
        let first = ephemeral(false).await;
        let port = first.local_addr().port();

        let config = ListenerConfig::default();
        let second = PortResponder::bind(port, config, FixedClock(0)).await;
        assert!(matches!(second, Err(ResponderError::Bind { port: p, .. }) if p == port));
    }
}
