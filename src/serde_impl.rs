//! Serde support: KSUIDs travel as their 27-character string form

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ksuid::Ksuid;

impl Serialize for Ksuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct KsuidVisitor;

impl Visitor<'_> for KsuidVisitor {
    type Value = Ksuid;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a 27-character base62 KSUID")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        value.parse().map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Ksuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(KsuidVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_as_string() {
        let value = serde_json::to_value(Ksuid::MAX).unwrap();
        assert_eq!(value, json!("aWgEPTl1tmebfsQzFP4bxwgy80V"));
    }

    #[test]
    fn test_deserialize_from_string() {
        let id: Ksuid = serde_json::from_str("\"0ujtsYcgvSTl8PAuAdqWYSMnLOv\"").unwrap();
        assert_eq!(id.unix_timestamp(), 1_507_608_047);
    }

    #[test]
    fn test_deserialize_rejects_bad_input() {
        let err = serde_json::from_str::<Ksuid>("\"zzzzzzzzzzzzzzzzzzzzzzzzzzz\"").unwrap_err();
        assert!(err.to_string().contains("needs 21 bytes"));

        assert!(serde_json::from_str::<Ksuid>("\"short\"").is_err());
        assert!(serde_json::from_str::<Ksuid>("42").is_err());
    }
}
