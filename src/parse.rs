use chrono::{DateTime, Utc};

use crate::base62;
use crate::config::{BYTE_LEN, PAYLOAD_LEN, STRING_LEN};
use crate::error::{KsuidError, Result};
use crate::ksuid::Ksuid;

/// Parse an encoded KSUID into its timestamp and random payload
///
/// # Arguments
/// * `encoded` - A 27-character base62 KSUID
///
/// # Returns
/// * `Result<(DateTime<Utc>, [u8; 16]), KsuidError>` - The creation time
///   (whole seconds) and payload, `InvalidFormat` for malformed input, or
///   `ValueTooLarge` when the string encodes more than 20 bytes
pub fn parse(encoded: &str) -> Result<(DateTime<Utc>, [u8; PAYLOAD_LEN])> {
    let ksuid = decode(encoded)?;
    let timestamp = ksuid.timestamp().inspect_err(|err| {
        tracing::debug!(error = %err, "rejected KSUID with unrepresentable timestamp");
    })?;
    Ok((timestamp, ksuid.payload()))
}

/// Decode an encoded KSUID into its raw value without interpreting the
/// timestamp
pub(crate) fn decode(encoded: &str) -> Result<Ksuid> {
    let chars = encoded.chars().count();
    if chars != STRING_LEN {
        tracing::debug!(chars, "rejected KSUID with wrong length");
        return Err(KsuidError::invalid_format(format!(
            "expected {} characters, got {}",
            STRING_LEN, chars
        )));
    }

    let decoded = base62::decode(encoded).map_err(|err| {
        tracing::debug!(error = %err, "rejected KSUID with invalid character");
        KsuidError::from(err)
    })?;

    if decoded.len() > BYTE_LEN {
        tracing::debug!(len = decoded.len(), "rejected KSUID wider than 20 bytes");
        return Err(KsuidError::ValueTooLarge { len: decoded.len() });
    }

    let mut raw = [0u8; BYTE_LEN];
    raw[BYTE_LEN - decoded.len()..].copy_from_slice(&decoded);
    Ok(Ksuid::from_bytes(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EPOCH_SECONDS;

    #[test]
    fn test_parse_nil() {
        let (ts, payload) = parse("000000000000000000000000000").unwrap();
        assert_eq!(ts.timestamp(), EPOCH_SECONDS);
        assert_eq!(payload, [0u8; PAYLOAD_LEN]);
    }

    #[test]
    fn test_parse_one_second_max_payload() {
        let mut raw = [0xFFu8; BYTE_LEN];
        raw[..4].copy_from_slice(&[0, 0, 0, 1]);
        let encoded = base62::encode(&raw);
        assert_eq!(encoded, "Fa84QWiAxLXUJaHZmEVPEF");

        let padded = format!("{:0>27}", encoded);
        let (ts, payload) = parse(&padded).unwrap();
        assert_eq!(ts.timestamp(), EPOCH_SECONDS + 1);
        assert_eq!(payload, [0xFF; PAYLOAD_LEN]);
    }

    #[test]
    fn test_parse_wrong_length() {
        for input in ["", "0", "00000000000000000000000000", "0000000000000000000000000000"] {
            let err = parse(input).unwrap_err();
            assert!(err.is_format_error(), "Expected InvalidFormat for {:?}", input);
        }
    }

    #[test]
    fn test_length_message_counts_characters() {
        let err = parse("ééé").unwrap_err();
        assert_eq!(
            err,
            KsuidError::InvalidFormat {
                reason: "expected 27 characters, got 3".to_string()
            }
        );
    }

    #[test]
    fn test_multibyte_input_reaches_alphabet_check() {
        let input = format!("{}é", "0".repeat(STRING_LEN - 1));
        assert_eq!(input.len(), STRING_LEN + 1);
        assert_eq!(
            parse(&input).unwrap_err(),
            KsuidError::InvalidFormat {
                reason: "Invalid base62 character: 'é'".to_string()
            }
        );
    }

    #[test]
    fn test_parse_invalid_character() {
        let err = parse("000000000000000000000000000!").unwrap_err();
        assert!(err.is_format_error());

        let err = parse("00000000000000000000000000!").unwrap_err();
        assert_eq!(
            err,
            KsuidError::InvalidFormat {
                reason: "Invalid base62 character: '!'".to_string()
            }
        );
    }

    #[test]
    fn test_parse_overflow_boundary() {
        assert!(parse("aWgEPTl1tmebfsQzFP4bxwgy80V").is_ok());
        assert_eq!(
            parse("aWgEPTl1tmebfsQzFP4bxwgy80W").unwrap_err(),
            KsuidError::ValueTooLarge { len: 21 }
        );
        assert_eq!(
            parse(&"z".repeat(STRING_LEN)).unwrap_err(),
            KsuidError::ValueTooLarge { len: 21 }
        );
    }

    #[test]
    fn test_decode_pads_short_values() {
        let id = decode("000000000000000000000000001").unwrap();
        let mut expected = [0u8; BYTE_LEN];
        expected[BYTE_LEN - 1] = 1;
        assert_eq!(id.as_bytes(), &expected);
    }
}
