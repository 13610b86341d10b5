//! The per-field decode capability used by the object decoder.

use serde_json::value::RawValue;

use crate::error::TypeMismatch;
use crate::literal::Literal;
use crate::nullable::Nullable;

/// A struct field that can decode itself from a raw JSON value fragment.
///
/// The object decoder calls [`DecodeField::decode_field`] once for every
/// occurrence of the field's key and never calls it when the key is missing.
pub trait DecodeField {
    /// Decodes `fragment`, the value found under this field's key.
    fn decode_field(&mut self, fragment: &RawValue) -> Result<(), TypeMismatch>;
}

impl<T: Literal> DecodeField for Nullable<T> {
    fn decode_field(&mut self, fragment: &RawValue) -> Result<(), TypeMismatch> {
        self.decode_fragment(fragment.get().as_bytes())
    }
}
