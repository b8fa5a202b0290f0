//! KsuidGenerator builder for injecting clock and random sources

use super::random::{RandSource, ThreadRandom};
use super::time::{SystemClock, TimeSource};
use super::KsuidGenerator;

/// Builder for KsuidGenerator
#[derive(Debug, Default, Clone)]
pub struct KsuidGeneratorBuilder<T = SystemClock, R = ThreadRandom> {
    pub(super) clock: T,
    pub(super) rng: R,
}

impl KsuidGeneratorBuilder {
    /// Create a builder with the system clock and the thread-local RNG
    pub fn new() -> Self {
        Self {
            clock: SystemClock,
            rng: ThreadRandom,
        }
    }
}

impl<T, R> KsuidGeneratorBuilder<T, R> {
    /// Replace the clock used for the timestamp field
    pub fn clock<C: TimeSource>(self, clock: C) -> KsuidGeneratorBuilder<C, R> {
        KsuidGeneratorBuilder {
            clock,
            rng: self.rng,
        }
    }

    /// Replace the source of the random payload
    pub fn rng<S: RandSource>(self, rng: S) -> KsuidGeneratorBuilder<T, S> {
        KsuidGeneratorBuilder {
            clock: self.clock,
            rng,
        }
    }
}

impl<T: TimeSource, R: RandSource> KsuidGeneratorBuilder<T, R> {
    /// Build the final KsuidGenerator
    pub fn build(self) -> KsuidGenerator<T, R> {
        KsuidGenerator::from_builder(self)
    }
}
