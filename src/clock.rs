//! Wall-clock seam.
//!
//! Reply payloads embed the current UNIX time, so the responder takes its
//! clock as a trait object-free generic parameter instead of calling
//! `SystemTime::now()` inline.  Production code uses [`SystemClock`]; tests
//! use [`FixedClock`] to make replies deterministic.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of "seconds since the UNIX epoch".
pub trait Clock: Send + Sync + 'static {
    fn unix_seconds(&self) -> u64;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> u64 {
        // A clock set before 1970 reads as the epoch itself.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// A clock frozen at one instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn unix_seconds(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_past_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.unix_seconds() >= 1_577_836_800);
    }

    #[test]
    fn fixed_clock_returns_its_instant() {
        assert_eq!(FixedClock(1_700_000_000).unix_seconds(), 1_700_000_000);
    }
}
