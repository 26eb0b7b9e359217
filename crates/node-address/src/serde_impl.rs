//! Optional serde integration.
//!
//! Human-readable formats carry the canonical ten-digit hex string; binary
//! formats carry the five-byte wire array. Deserializing runs the same
//! checks as [`FromStr`](core::str::FromStr) and [`Address::decode`].

use core::fmt;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

use crate::constants::ADDRESS_LENGTH;
use crate::Address;

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            let mut tuple = serializer.serialize_tuple(ADDRESS_LENGTH)?;
            for b in self.to_bytes() {
                tuple.serialize_element(&b)?;
            }
            tuple.end()
        }
    }
}

struct HexVisitor;

impl Visitor<'_> for HexVisitor {
    type Value = Address;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a hex node address of at most 10 digits")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }
}

struct WireVisitor;

impl<'de> Visitor<'de> for WireVisitor {
    type Value = Address;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} address bytes", ADDRESS_LENGTH)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        if v.len() != ADDRESS_LENGTH {
            return Err(E::invalid_length(v.len(), &self));
        }
        Address::decode(v).map_err(E::custom)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut raw = [0u8; ADDRESS_LENGTH];
        for (i, slot) in raw.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
        }
        Ok(Address::from_array(raw))
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(HexVisitor)
        } else {
            deserializer.deserialize_tuple(ADDRESS_LENGTH, WireVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use serde::de::value::{Error as ValueError, SeqDeserializer};

    #[test]
    fn test_wire_visitor_accepts_five_bytes() {
        let addr = WireVisitor
            .visit_bytes::<ValueError>(&[1, 2, 3, 4, 5])
            .unwrap();
        assert_eq!(addr, Address::new(0x0102030405));
    }

    #[test]
    fn test_wire_visitor_rejects_six_bytes() {
        let err = WireVisitor
            .visit_bytes::<ValueError>(&[1, 2, 3, 4, 5, 6])
            .unwrap_err();
        assert_eq!(
            alloc::string::ToString::to_string(&err),
            "invalid length 6, expected 5 address bytes"
        );
    }

    #[test]
    fn test_wire_visitor_rejects_four_elements() {
        let seq = SeqDeserializer::<_, ValueError>::new(vec![1u8, 2, 3, 4].into_iter());
        let err = WireVisitor.visit_seq(seq).unwrap_err();
        assert_eq!(
            alloc::string::ToString::to_string(&err),
            "invalid length 4, expected 5 address bytes"
        );
    }

    #[test]
    fn test_wire_visitor_reads_five_elements() {
        let seq = SeqDeserializer::<_, ValueError>::new(vec![0xffu8, 0, 0, 0, 1].into_iter());
        assert_eq!(WireVisitor.visit_seq(seq).unwrap(), Address::new(0xff00000001));
    }
}
