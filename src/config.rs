//! Listener configuration.
//!
//! [`ListenerConfig`] is fixed at process startup and handed by value to every
//! responder; nothing mutates it afterwards.  The debug switch lives here
//! rather than in a global so each responder decides locally whether to emit
//! informational log lines.

use std::ops::RangeInclusive;

use thiserror::Error;

/// Default port interval, inclusive on both ends.
pub const DEFAULT_PORT_START: u16 = 2600;
pub const DEFAULT_PORT_END: u16 = 2610;

/// Immutable per-process listener settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerConfig {
    /// First port of the listening interval.
    pub port_start: u16,
    /// Last port of the listening interval (inclusive).
    pub port_end: u16,
    /// Emit informational log lines for every receive/send cycle.
    pub debug: bool,
}

impl ListenerConfig {
    /// Build a config, rejecting inverted intervals.
    pub fn new(port_start: u16, port_end: u16, debug: bool) -> Result<Self, ConfigError> {
        if port_start > port_end {
            return Err(ConfigError::InvertedRange {
                start: port_start,
                end: port_end,
            });
        }
        Ok(Self {
            port_start,
            port_end,
            debug,
        })
    }

    /// All ports this process listens on.
    pub fn ports(&self) -> RangeInclusive<u16> {
        self.port_start..=self.port_end
    }

    /// Number of ports in the interval.
    pub fn port_count(&self) -> usize {
        usize::from(self.port_end - self.port_start) + 1
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            port_start: DEFAULT_PORT_START,
            port_end: DEFAULT_PORT_END,
            debug: false,
        }
    }
}

/// Invalid startup arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Range start was greater than range end.
    #[error("inverted port range {start}-{end}")]
    InvertedRange { start: u16, end: u16 },
    /// Range argument was not `PORT` or `START-END`.
    #[error("malformed port range '{0}': expected START-END")]
    Malformed(String),
}

/// Whether a bare command-line token switches debug mode on.
///
/// The historical invocation style is `udp-stamp DEBUG`, matched without
/// regard to case.
pub fn is_debug_token(arg: &str) -> bool {
    arg.eq_ignore_ascii_case("DEBUG")
}

/// Parse `"2600-2610"` (or a single `"2600"`) into an inclusive port pair.
pub fn parse_port_range(s: &str) -> Result<(u16, u16), ConfigError> {
    let malformed = || ConfigError::Malformed(s.to_owned());
    match s.split_once('-') {
        Some((start, end)) => {
            let start = start.trim().parse().map_err(|_| malformed())?;
            let end = end.trim().parse().map_err(|_| malformed())?;
            if start > end {
                return Err(ConfigError::InvertedRange { start, end });
            }
            Ok((start, end))
        }
        None => {
            let port = s.trim().parse().map_err(|_| malformed())?;
            Ok((port, port))
        }
    }
}
