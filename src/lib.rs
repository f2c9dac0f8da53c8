//! `udp-stamp` — a UDP daemon that answers every datagram with the sender's
//! IP address and the current UNIX timestamp, encoded as binary octet text.
//!
//! # Architecture
//!
//! ```text
//!  ┌────────────┐  any datagram   ┌───────────────┐
//!  │   Sender   │────────────────▶│ PortResponder │   one per port,
//!  └─────┬──────┘                 │  (serve loop) │   ports 2600-2610
//!        │                        └───────┬───────┘
//!        │   "00110001 00111001 ..."      │
//!        │◀───────────────────────────────┘
//!        │         sender IP + timestamp, octet-encoded
//!        │
//!  ┌─────▼─────┐
//!  │  Socket   │  (thin async wrapper around tokio UdpSocket)
//!  └───────────┘
//! ```
//!
//! Each module has a single responsibility:
//! - [`config`]    — immutable startup settings (port interval, debug switch)
//! - [`encode`]    — reply payload construction and octet encoding (pure)
//! - [`clock`]     — UNIX-time source, swappable for tests
//! - [`socket`]    — async UDP socket abstraction
//! - [`responder`] — per-port receive → reply loop
//! - [`error`]     — failure taxonomy and fatal-error formatting
//!
//! Responders never share state and never retry; the first I/O failure on
//! any port is reported to the orchestrating binary, which ends the whole
//! process.

pub mod clock;
pub mod config;
pub mod encode;
pub mod error;
pub mod responder;
pub mod socket;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ListenerConfig;
pub use encode::ReplyPayload;
pub use error::ResponderError;
pub use responder::PortResponder;
