//! # KSUID
//!
//! K-Sortable Unique Identifiers: a 4-byte timestamp (seconds since
//! 2014-05-13T16:53:20Z) followed by 16 random bytes, written as a
//! fixed-width 27-character base62 string.
//!
//! Encoded identifiers are:
//! - 📏 Fixed width (27 characters, `[0-9A-Za-z]`)
//! - 📈 Time-sorted as plain strings
//! - 🎲 Collision-resistant (128 random bits)
//! - 🔒 Thread-safe, with no shared mutable state
//!
//! ```
//! let id = ksuid::generate();
//! assert_eq!(id.len(), 27);
//!
//! let (timestamp, payload) = ksuid::parse(&id).unwrap();
//! assert!(timestamp.timestamp() >= ksuid::EPOCH_SECONDS);
//! assert_eq!(payload.len(), 16);
//! ```

#![forbid(unsafe_code)]

pub mod base62;
mod config;
mod error;
mod generator;
mod ksuid;
mod parse;
pub mod radix;
#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
pub mod tests;

use chrono::{DateTime, Utc};

// Re-export main types
pub use config::{BYTE_LEN, EPOCH_SECONDS, PAD_CHAR, PAYLOAD_LEN, STRING_LEN, TIMESTAMP_LEN};
pub use error::{KsuidError, Result};
pub use generator::{
    KsuidGenerator, KsuidGeneratorBuilder, PrimaryKeySource, RandSource, SystemClock,
    ThreadRandom, TimeSource,
};
pub use ksuid::Ksuid;
pub use parse::parse;

/// Generate a new encoded KSUID using the system clock and thread-local RNG
pub fn generate() -> String {
    KsuidGenerator::new().generate()
}

/// Generate a new encoded KSUID stamped with `now`
pub fn generate_at(now: DateTime<Utc>) -> String {
    KsuidGenerator::new().generate_at(now)
}
