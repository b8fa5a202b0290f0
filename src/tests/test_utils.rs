//! Shared test utilities for KSUID tests

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::base62;
use crate::config::STRING_LEN;
use crate::generator::{RandSource, TimeSource};

/// Clock pinned to a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pin the clock to `unix_seconds`
    pub fn at(unix_seconds: i64) -> Self {
        Self(DateTime::<Utc>::from_timestamp(unix_seconds, 0).expect("timestamp in range"))
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Random source that fills every byte with the same value
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub u8);

impl RandSource for FixedRandom {
    fn fill_bytes(&self, buf: &mut [u8]) {
        buf.fill(self.0);
    }
}

/// Assert that an encoded KSUID has the fixed width and alphabet
pub fn assert_well_formed(id: &str) {
    assert_eq!(id.len(), STRING_LEN, "Wrong width for {}", id);
    assert!(
        id.chars().all(|c| base62::digit_value(c).is_some()),
        "Non-base62 character in {}",
        id
    );
}

/// Assert that all IDs in the collection are unique
pub fn assert_unique_ids(ids: &[String], expected_count: usize) {
    let set: HashSet<_> = ids.iter().collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}

/// Assert that string order and raw byte order agree for every adjacent pair
pub fn assert_string_order_matches_bytes(ids: &mut [String]) {
    ids.sort_unstable();
    for pair in ids.windows(2) {
        let a: crate::Ksuid = pair[0].parse().expect("valid KSUID");
        let b: crate::Ksuid = pair[1].parse().expect("valid KSUID");
        assert!(
            a.as_bytes() <= b.as_bytes(),
            "{} sorts before {} as a string but not as bytes",
            pair[0],
            pair[1]
        );
    }
}
