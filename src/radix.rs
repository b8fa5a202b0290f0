//! Arbitrary-precision radix conversion
//!
//! Byte sequences are treated as big-endian base-256 unsigned integers. The
//! helpers here move such integers to and from digit lists in any radix of
//! two or more, most significant digit first.
use num_bigint::BigUint;
use num_traits::Zero;

/// A validated conversion radix (at least 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(u32);

impl Radix {
    /// Base 62, used by the textual KSUID form
    pub const BASE62: Self = Self(62);

    /// Base 256, one digit per byte
    pub const BYTE: Self = Self(256);

    /// Validate `radix`; `None` for 0 and 1
    #[inline]
    pub const fn new(radix: u32) -> Option<Self> {
        if radix < 2 {
            None
        } else {
            Some(Self(radix))
        }
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Whether `num-bigint`'s byte-digit conversions apply
    #[inline]
    const fn fits_in_byte_digits(self) -> bool {
        self.0 <= 256
    }
}

/// Interpret `bytes` as a big-endian base-256 integer
///
/// An empty slice is zero.
#[inline]
pub fn bytes_to_integer(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Digits of `n` in `radix`, most significant first
///
/// Zero has no significant digits and yields an empty list.
pub fn integer_to_digits(n: &BigUint, radix: Radix) -> Vec<u32> {
    if n.is_zero() {
        return Vec::new();
    }
    if radix.fits_in_byte_digits() {
        return n.to_radix_be(radix.get()).into_iter().map(u32::from).collect();
    }

    // Long division over little-endian 32-bit limbs
    let divisor = u64::from(radix.get());
    let mut limbs = n.to_u32_digits();
    let mut digits = Vec::new();
    while !limbs.is_empty() {
        let mut rem = 0u64;
        for limb in limbs.iter_mut().rev() {
            let cur = (rem << 32) | u64::from(*limb);
            *limb = (cur / divisor) as u32;
            rem = cur % divisor;
        }
        digits.push(rem as u32);
        while limbs.last() == Some(&0) {
            limbs.pop();
        }
    }
    digits.reverse();
    digits
}

/// Rebuild an integer from its digits in `radix`
///
/// An empty digit list is zero. Returns `None` if any digit is not below
/// `radix`.
pub fn digits_to_integer(digits: &[u32], radix: Radix) -> Option<BigUint> {
    if digits.iter().any(|&d| d >= radix.get()) {
        return None;
    }
    if digits.is_empty() {
        return Some(BigUint::zero());
    }
    if radix.fits_in_byte_digits() {
        // Every digit is below 256 here
        let bytes: Vec<u8> = digits.iter().map(|&d| d as u8).collect();
        return BigUint::from_radix_be(&bytes, radix.get());
    }
    Some(
        digits
            .iter()
            .fold(BigUint::zero(), |acc, &d| acc * radix.get() + d),
    )
}

/// Minimal big-endian byte form of `n`
///
/// Every base-256 digit is kept, zero-valued ones included; only the leading
/// zero bytes that the integer cannot carry are absent. Zero yields an empty
/// vector.
#[inline]
pub fn integer_to_bytes(n: &BigUint) -> Vec<u8> {
    integer_to_digits(n, Radix::BYTE)
        .into_iter()
        .map(|d| d as u8)
        .collect()
}
