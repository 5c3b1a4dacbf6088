//! Utilities for serializing and deserializing big integers using Serde.
//!
//! [`SerializeBigUint`] looks like a "module" to Serde and can be used with the
//! `#[serde(with = "SerializeBigUint")]` syntax. Values are written as their minimal big-endian
//! byte string, so every integer round-trips exactly regardless of its size.

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialization/deserialization functionality for [`BigUint`] values carried in wire messages.
pub trait SerializeBigUint: Sized {
    /// Proxy serialization function telling serde how to serialize the implementing type.
    fn serialize<S>(this: &Self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer;

    /// Proxy deserialization function telling serde how to deserialize the implementing type.
    fn deserialize<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>;
}

impl SerializeBigUint for BigUint {
    fn serialize<S>(this: &Self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        this.to_bytes_be().serialize(serializer)
    }

    fn deserialize<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = <Vec<u8>>::deserialize(deserializer)?;
        Ok(BigUint::from_bytes_be(&bytes))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapped(#[serde(with = "SerializeBigUint")] BigUint);

    #[test]
    fn encodes_big_endian_bytes() {
        let value = Wrapped(BigUint::from(0x0102_0304u32));
        let bytes = bincode::serialize(&value).unwrap();
        let plain = bincode::serialize(&vec![1u8, 2, 3, 4]).unwrap();
        assert_eq!(bytes, plain);
    }

    #[test]
    fn preserves_values_wider_than_a_machine_word() {
        let value = Wrapped(BigUint::from(1u8) << 4095usize);
        let bytes = bincode::serialize(&value).unwrap();
        let decoded: Wrapped = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(decoded.0.bits(), 4096);
    }
}
