/// Base62 encoding and decoding of byte sequences
///
/// Bytes are read as one big-endian integer and re-expressed in base 62 using
/// a lookup table for the reverse direction. The alphabet is in ASCII order,
/// so equal-width encodings sort the same way as the integers they hold.
use once_cell::sync::Lazy;

use crate::radix::{bytes_to_integer, digits_to_integer, integer_to_bytes, integer_to_digits, Radix};

/// Radix of the encoding
pub const BASE: Radix = Radix::BASE62;

/// Character set for base62 encoding (0-9, A-Z, a-z)
pub const BASE62_CHARS: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Lookup table for decoding base62 characters to their values
static DECODE_MAP: Lazy<[i8; 256]> = Lazy::new(|| {
    let mut map = [-1i8; 256];
    for (i, &c) in BASE62_CHARS.iter().enumerate() {
        map[c as usize] = i as i8;
    }
    map
});

/// Encode bytes to an unpadded base62 string
///
/// Leading zero bytes carry no value and do not appear in the output; empty
/// or all-zero input encodes to the empty string.
///
/// # Arguments
/// * `bytes` - Big-endian bytes to encode
///
/// # Returns
/// * `String` - The base62 encoded string
pub fn encode(bytes: &[u8]) -> String {
    integer_to_digits(&bytes_to_integer(bytes), BASE)
        .into_iter()
        .map(|digit| BASE62_CHARS[digit as usize] as char)
        .collect()
}

/// Decode a base62 string to its minimal big-endian bytes
///
/// # Arguments
/// * `encoded` - The base62 encoded string
///
/// # Returns
/// * `Result<Vec<u8>, DecodeError>` - The decoded bytes (no leading zero
///   bytes) or the first character outside the alphabet
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let mut digits = Vec::with_capacity(encoded.len());
    for c in encoded.chars() {
        let value = digit_value(c).ok_or(DecodeError::InvalidCharacter(c))?;
        digits.push(u32::from(value));
    }

    // Every digit is below 62 by construction of the lookup table
    let n = digits_to_integer(&digits, BASE).unwrap_or_default();
    Ok(integer_to_bytes(&n))
}

/// Value of a single base62 character
#[inline]
pub fn digit_value(c: char) -> Option<u8> {
    let byte = u8::try_from(c).ok()?;
    u8::try_from(DECODE_MAP[byte as usize]).ok()
}

/// Errors that can occur during base62 decoding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input string contains an invalid character
    #[error("Invalid base62 character: {0:?}")]
    InvalidCharacter(char),
}
