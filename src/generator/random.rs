//! Random payload sources

use rand::{rng, RngCore};

/// A source of cryptographically secure random bytes
///
/// This abstraction allows you to plug in the thread-local RNG or a
/// deterministic source in tests.
pub trait RandSource {
    /// Fills `buf` with random bytes
    fn fill_bytes(&self, buf: &mut [u8]);
}

/// A `RandSource` backed by the thread-local RNG (`rand::rng()`)
///
/// The generator is ChaCha-based, seeded from the OS and periodically
/// reseeded. Each thread has its own instance, so this zero-sized handle can
/// be shared across threads without contention.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    #[inline]
    fn fill_bytes(&self, buf: &mut [u8]) {
        rng().fill_bytes(buf);
    }
}
