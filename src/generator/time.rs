//! Time utilities for KSUID generation
//!
//! Provides the wall-clock source and epoch arithmetic for the timestamp field

use chrono::{DateTime, Utc};

use crate::config::EPOCH_SECONDS;

/// A source of the current wall-clock time
///
/// Lets tests pin the clock while production code reads the system time.
pub trait TimeSource {
    /// Returns the current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Seconds of `now` past the KSUID epoch, wrapped into 32 bits
///
/// Sub-second precision is dropped. Instants before the epoch or more than
/// `u32::MAX` seconds after it wrap around.
#[inline]
pub fn timestamp_offset(now: DateTime<Utc>) -> u32 {
    let secs = now.timestamp();
    if secs < EPOCH_SECONDS {
        tracing::warn!(
            unix_seconds = secs,
            "clock is before the KSUID epoch; timestamp field wraps"
        );
    }
    secs.wrapping_sub(EPOCH_SECONDS) as u32
}
