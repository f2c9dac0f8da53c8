//! Error taxonomy for the serve path.
//!
//! Three things can go wrong: binding a port at startup, receiving a
//! datagram, and sending the reply.  Each variant keeps the port so the
//! operator can tell which listener died.  None of these are retried — the
//! first failure anywhere ends the whole process (policy enforced in
//! `main`, not here).

use std::fmt::Write as _;

use thiserror::Error;

/// A fatal failure in one port's responder.
#[derive(Debug, Error)]
pub enum ResponderError {
    /// The port was occupied or the process lacks permission to bind it.
    #[error("could not bind UDP port {port}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },
    /// The blocking receive failed.
    #[error("receive failed on UDP port {port}")]
    Receive {
        port: u16,
        #[source]
        source: std::io::Error,
    },
    /// Transmitting a reply failed.
    #[error("send failed on UDP port {port}")]
    Send {
        port: u16,
        #[source]
        source: std::io::Error,
    },
}

/// Render a fatal error in the daemon's traditional Amiga style, followed by
/// the full cause chain.
pub fn guru_meditation(err: &(dyn std::error::Error + 'static)) -> String {
    let mut msg = format!(
        "Software Failure.  Press left mouse button to continue.\n\
         Guru Meditation: {err}"
    );
    let mut cause = err.source();
    while let Some(c) = cause {
        let _ = write!(msg, "\n  caused by: {c}");
        cause = c.source();
    }
    msg
}
