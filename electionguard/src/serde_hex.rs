// Hex serialization for the fixed-width byte encodings.
//
// Elements only serialize: reading one back needs a GroupContext, so callers import them with
// `GroupContext::element_mod_p_from_hex` and friends.
use crate::*;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::Deserialize;
use serde::Serialize;
use std::borrow::Cow;

pub use hex_buffer_serde::Hex;

impl Serialize for ElementModP {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl Serialize for ElementModQ {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

// a single-purpose type for use in `#[serde(with)]`
pub enum UInt256Hex {}

impl Hex<UInt256> for UInt256Hex {
    type Error = String;

    fn create_bytes(value: &UInt256) -> Cow<'_, [u8]> {
        value.as_bytes()[..].into()
    }

    fn from_bytes(bytes: &[u8]) -> Result<UInt256, String> {
        if bytes.len() != 32 {
            return Err(format!("expected 32 bytes, got {}", bytes.len()));
        }
        UInt256::from_bytes(bytes).ok_or_else(|| "invalid UInt256".to_owned())
    }
}

impl Serialize for UInt256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        UInt256Hex::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for UInt256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        UInt256Hex::deserialize(deserializer)
    }
}
