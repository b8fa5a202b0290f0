//! Wire-format constants
//!
//! These define the binary and textual layout of a KSUID. They must never
//! differ between the side that generates an identifier and the side that
//! parses it, so none of them is runtime-configurable.

/// KSUID epoch in Unix seconds (2014-05-13T16:53:20Z)
pub const EPOCH_SECONDS: i64 = 1_400_000_000;

/// Width of the big-endian timestamp field in bytes
pub const TIMESTAMP_LEN: usize = 4;

/// Width of the random payload in bytes
pub const PAYLOAD_LEN: usize = 16;

/// Width of a raw KSUID in bytes
pub const BYTE_LEN: usize = TIMESTAMP_LEN + PAYLOAD_LEN;

/// Width of an encoded KSUID in characters
pub const STRING_LEN: usize = 27;

/// Character used to left-pad encoded KSUIDs (base62 zero)
pub const PAD_CHAR: char = '0';
