//! Object decoder — walks a JSON object and hands each registered key's raw
//! value to its [`DecodeField`].
//!
//! Tokenizing is left to `serde_json`; the walker only borrows each value as
//! a [`RawValue`] in source order. Keys are matched exactly. Keys that are not
//! registered are skipped and registered keys that are missing are never
//! touched, which is what keeps their `present` flag `false`.

use std::fmt;

use log::{debug, trace};
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_json::value::RawValue;

use crate::error::{DecodeError, Result};
use crate::field::DecodeField;
use crate::options::DecodeOptions;

/// Ordered set of `key -> field` bindings for one decode call.
#[derive(Default)]
pub struct FieldSet<'a> {
    entries: Vec<(&'a str, &'a mut dyn DecodeField)>,
}

impl<'a> FieldSet<'a> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builder form of [`FieldSet::insert`].
    pub fn with(mut self, key: &'a str, field: &'a mut dyn DecodeField) -> Self {
        self.insert(key, field);
        self
    }

    /// Binds `key` to `field`, replacing an earlier binding of the same key.
    pub fn insert(&mut self, key: &'a str, field: &'a mut dyn DecodeField) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = field,
            None => self.entries.push((key, field)),
        }
    }

    /// Number of bound keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No keys are bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bound keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut (dyn DecodeField + 'a)> {
        self.entries
            .iter_mut()
            .find(|(k, _)| *k == key)
            .map(|(_, field)| &mut **field)
    }
}

impl fmt::Debug for FieldSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}

/// A record whose nullable fields are decoded by [`decode_into`].
///
/// # Example
///
/// ```
/// use json_joy_nullable::{decode_into, DecodeRecord, FieldSet, NullableFloat, NullableFloatSlice};
///
/// #[derive(Default)]
/// struct Reading {
///     value: NullableFloat,
///     samples: NullableFloatSlice,
/// }
///
/// impl DecodeRecord for Reading {
///     fn register<'a>(&'a mut self, fields: &mut FieldSet<'a>) {
///         fields.insert("value", &mut self.value);
///         fields.insert("samples", &mut self.samples);
///     }
/// }
///
/// let mut reading = Reading::default();
/// decode_into(br#"{"value":null,"samples":[1.5]}"#, &mut reading).unwrap();
/// assert!(reading.value.present && !reading.value.valid);
/// assert_eq!(reading.samples.get(), Some(&vec![1.5]));
/// ```
pub trait DecodeRecord {
    /// Binds each decodable field of `self` under its JSON key.
    fn register<'a>(&'a mut self, fields: &mut FieldSet<'a>);
}

/// Decodes a JSON object into the bound fields.
///
/// Malformed JSON fails before any field is touched. A top-level `null` leaves
/// every field absent. On a field type mismatch the field keeps
/// `present = true` and the error names the key.
pub fn decode_object(input: &[u8], fields: &mut FieldSet<'_>, opts: &DecodeOptions) -> Result<()> {
    let entries = match serde_json::from_slice::<TopLevel<'_>>(input)? {
        TopLevel::Object(entries) => entries,
        TopLevel::Null => {
            trace!("top-level null, no fields decoded");
            return Ok(());
        }
        TopLevel::Other(found) => return Err(DecodeError::NotAnObject { found }),
    };

    let mut first_error = None;
    for (key, fragment) in entries {
        let Some(field) = fields.get_mut(&key) else {
            debug!("skipping unregistered key `{key}`");
            continue;
        };
        trace!("decoding field `{key}`");
        if let Err(source) = field.decode_field(fragment) {
            let err = DecodeError::Field { field: key, source };
            if opts.fail_fast {
                return Err(err);
            }
            if first_error.is_none() {
                first_error = Some(err);
            }
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Decodes `input` into a caller-owned record with default options.
///
/// The record is left in whatever state decoding reached, so on error the
/// failing field still reports `present = true`.
pub fn decode_into<R: DecodeRecord + ?Sized>(input: &[u8], record: &mut R) -> Result<()> {
    decode_into_with(input, record, &DecodeOptions::default())
}

/// Like [`decode_into`], with explicit options.
pub fn decode_into_with<R: DecodeRecord + ?Sized>(
    input: &[u8],
    record: &mut R,
    opts: &DecodeOptions,
) -> Result<()> {
    let mut fields = FieldSet::new();
    record.register(&mut fields);
    decode_object(input, &mut fields, opts)
}

/// Decodes a fresh record, discarding it on error.
pub fn from_slice<R: DecodeRecord + Default>(input: &[u8]) -> Result<R> {
    let mut record = R::default();
    decode_into(input, &mut record)?;
    Ok(record)
}

/// Decodes a fresh record from a string, discarding it on error.
pub fn from_str<R: DecodeRecord + Default>(input: &str) -> Result<R> {
    from_slice(input.as_bytes())
}

/// Shape of the top-level value, with object members kept raw.
enum TopLevel<'de> {
    Object(Vec<(String, &'de RawValue)>),
    Null,
    Other(&'static str),
}

impl<'de> Deserialize<'de> for TopLevel<'de> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(TopLevelVisitor)
    }
}

struct TopLevelVisitor;

impl<'de> Visitor<'de> for TopLevelVisitor {
    type Value = TopLevel<'de>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(key) = map.next_key::<String>()? {
            let value: &'de RawValue = map.next_value()?;
            entries.push((key, value));
        }
        Ok(TopLevel::Object(entries))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(TopLevel::Null)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(TopLevel::Null)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(TopLevel::Other("array"))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> std::result::Result<Self::Value, E> {
        Ok(TopLevel::Other("boolean"))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> std::result::Result<Self::Value, E> {
        Ok(TopLevel::Other("number"))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> std::result::Result<Self::Value, E> {
        Ok(TopLevel::Other("number"))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> std::result::Result<Self::Value, E> {
        Ok(TopLevel::Other("number"))
    }

    fn visit_str<E: de::Error>(self, _: &str) -> std::result::Result<Self::Value, E> {
        Ok(TopLevel::Other("string"))
    }
}
