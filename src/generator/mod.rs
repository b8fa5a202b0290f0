//! KSUID generator
//!
//! Split into modules for testability:
//! - `time` - Wall-clock source and epoch arithmetic
//! - `random` - Random payload sources
//! - `builder` - Source injection

mod builder;
mod random;
mod time;

use chrono::{DateTime, Utc};

use crate::config::PAYLOAD_LEN;
use crate::ksuid::Ksuid;

pub use builder::KsuidGeneratorBuilder;
pub use random::{RandSource, ThreadRandom};
pub use time::{timestamp_offset, SystemClock, TimeSource};

/// Callback contract for layers that need a fresh primary-key value
///
/// The returned string is opaque to the caller.
pub trait PrimaryKeySource {
    /// Produce a new primary-key value
    fn autogenerate(&self) -> String;
}

/// Stateless KSUID generator
///
/// Holds only its clock and random source, so a single instance can be
/// shared across threads without locking.
#[derive(Debug, Default, Clone)]
pub struct KsuidGenerator<T = SystemClock, R = ThreadRandom> {
    clock: T,
    rng: R,
}

impl KsuidGenerator {
    /// Create with the system clock and the thread-local RNG
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new builder for injecting sources
    pub fn builder() -> KsuidGeneratorBuilder {
        KsuidGeneratorBuilder::new()
    }
}

impl<T: TimeSource, R: RandSource> KsuidGenerator<T, R> {
    pub(crate) fn from_builder(b: KsuidGeneratorBuilder<T, R>) -> Self {
        Self {
            clock: b.clock,
            rng: b.rng,
        }
    }

    /// Generate a new KSUID stamped with the current time
    #[inline]
    pub fn next_id(&self) -> Ksuid {
        self.next_id_at(self.clock.now())
    }

    /// Generate a new KSUID stamped with `now`
    pub fn next_id_at(&self, now: DateTime<Utc>) -> Ksuid {
        let mut payload = [0u8; PAYLOAD_LEN];
        self.rng.fill_bytes(&mut payload);
        let id = Ksuid::from_parts(timestamp_offset(now), payload);
        tracing::trace!(ksuid = %id, "generated KSUID");
        id
    }

    /// Generate a new encoded KSUID (27 characters)
    pub fn generate(&self) -> String {
        self.next_id().to_string()
    }

    /// Generate a new encoded KSUID stamped with `now`
    pub fn generate_at(&self, now: DateTime<Utc>) -> String {
        self.next_id_at(now).to_string()
    }
}

impl<T: TimeSource, R: RandSource> PrimaryKeySource for KsuidGenerator<T, R> {
    fn autogenerate(&self) -> String {
        self.generate()
    }
}
