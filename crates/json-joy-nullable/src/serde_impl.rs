//! `serde` integration for [`Nullable`].
//!
//! A valid field serializes as its value and anything else as `null`. A valid
//! value JSON cannot represent (NaN, infinities) is an encode error. Pair a
//! field with `#[serde(default, skip_serializing_if = "Nullable::is_absent")]`
//! so a missing key stays missing in both directions. Through `serde` a type
//! mismatch fails the whole record; use [`decode_into`](crate::decode_into)
//! when the partial state matters.

use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::literal::Literal;
use crate::nullable::Nullable;

impl<T: Literal> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.valid {
            self.value.check_encodable().map_err(S::Error::custom)?;
            serializer.serialize_some(&self.value)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de, T: Deserialize<'de> + Default> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Nullable::from)
    }
}
