//! Raw 20-byte KSUID value
//!
//! Layout: 4-byte big-endian timestamp offset from [`EPOCH_SECONDS`]
//! followed by a 16-byte random payload. Byte order, integer order and the
//! order of the 27-character encodings all agree.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::base62;
use crate::config::{BYTE_LEN, EPOCH_SECONDS, PAYLOAD_LEN, PAD_CHAR, STRING_LEN, TIMESTAMP_LEN};
use crate::error::{KsuidError, Result};
use crate::parse;

/// K-sortable unique identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ksuid([u8; BYTE_LEN]);

impl Ksuid {
    /// All-zero KSUID, encodes to 27 `'0'` characters
    pub const NIL: Self = Self([0; BYTE_LEN]);

    /// Largest KSUID, encodes to `aWgEPTl1tmebfsQzFP4bxwgy80V`
    pub const MAX: Self = Self([0xFF; BYTE_LEN]);

    /// Wrap raw bytes
    #[inline]
    pub const fn from_bytes(bytes: [u8; BYTE_LEN]) -> Self {
        Self(bytes)
    }

    /// Copy raw bytes from a slice that must be exactly 20 bytes long
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; BYTE_LEN] = bytes.try_into().map_err(|_| {
            KsuidError::invalid_format(format!(
                "expected {} bytes, got {}",
                BYTE_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(raw))
    }

    /// Assemble a KSUID from its timestamp offset and payload
    pub const fn from_parts(timestamp_offset: u32, payload: [u8; PAYLOAD_LEN]) -> Self {
        let mut raw = [0u8; BYTE_LEN];
        let ts = timestamp_offset.to_be_bytes();
        let mut i = 0;
        while i < TIMESTAMP_LEN {
            raw[i] = ts[i];
            i += 1;
        }
        let mut j = 0;
        while j < PAYLOAD_LEN {
            raw[TIMESTAMP_LEN + j] = payload[j];
            j += 1;
        }
        Self(raw)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; BYTE_LEN] {
        &self.0
    }

    /// Seconds since [`EPOCH_SECONDS`]
    #[inline]
    pub const fn timestamp_offset(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Seconds since the Unix epoch
    #[inline]
    pub const fn unix_timestamp(&self) -> i64 {
        self.timestamp_offset() as i64 + EPOCH_SECONDS
    }

    /// Timestamp as a UTC instant
    pub fn timestamp(&self) -> Result<DateTime<Utc>> {
        let secs = self.unix_timestamp();
        DateTime::<Utc>::from_timestamp(secs, 0).ok_or_else(|| {
            KsuidError::invalid_format(format!("timestamp {} is not representable", secs))
        })
    }

    /// Random payload
    #[inline]
    pub fn payload(&self) -> [u8; PAYLOAD_LEN] {
        let mut payload = [0u8; PAYLOAD_LEN];
        payload.copy_from_slice(&self.0[TIMESTAMP_LEN..]);
        payload
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        *self == Self::NIL
    }
}

impl fmt::Display for Ksuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = base62::encode(&self.0);
        for _ in encoded.len()..STRING_LEN {
            f.write_char(PAD_CHAR)?;
        }
        f.write_str(&encoded)
    }
}

impl FromStr for Ksuid {
    type Err = KsuidError;

    fn from_str(s: &str) -> Result<Self> {
        parse::decode(s)
    }
}

impl From<[u8; BYTE_LEN]> for Ksuid {
    fn from(bytes: [u8; BYTE_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Ksuid> for [u8; BYTE_LEN] {
    fn from(ksuid: Ksuid) -> Self {
        ksuid.0
    }
}

impl TryFrom<&[u8]> for Ksuid {
    type Error = KsuidError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl AsRef<[u8]> for Ksuid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
