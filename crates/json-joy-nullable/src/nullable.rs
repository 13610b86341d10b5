//! `Nullable<T>` — a JSON field that may be absent, null, or set.

use log::{debug, trace};

use crate::error::TypeMismatch;
use crate::literal::Literal;

/// Tri-state field container.
///
/// | JSON input            | `present` | `valid` | `value`   |
/// |-----------------------|-----------|---------|-----------|
/// | key missing           | `false`   | `false` | zero      |
/// | `"key": null`         | `true`    | `false` | zero      |
/// | `"key": <v>`          | `true`    | `true`  | `v`       |
/// | `"key": <wrong type>` | `true`    | `false` | zero, err |
///
/// `valid` implies `present`. The constructors below keep that invariant; the
/// fields are public for plain read access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nullable<T> {
    /// The key appeared in the source object.
    pub present: bool,
    /// The key appeared and carried a non-null value of the right type.
    pub valid: bool,
    /// Decoded value; the zero value unless `valid`.
    pub value: T,
}

/// Nullable 64-bit float.
pub type NullableFloat = Nullable<f64>;

/// Nullable sequence of 64-bit floats.
pub type NullableFloatSlice = Nullable<Vec<f64>>;

/// Borrowed view of a [`Nullable`] as one of its three states.
#[derive(Debug, PartialEq)]
pub enum Presence<'a, T> {
    /// The key was missing.
    Absent,
    /// The key was present with `null` or a value of the wrong type.
    Null,
    /// The key was present with a usable value.
    Value(&'a T),
}

impl<T: Default> Nullable<T> {
    /// A field whose key was not present.
    pub fn absent() -> Self {
        Self::default()
    }

    /// A field that was present with an explicit `null`.
    pub fn null() -> Self {
        Self {
            present: true,
            valid: false,
            value: T::default(),
        }
    }
}

impl<T> Nullable<T> {
    /// A field that was present with a value.
    pub fn new(value: T) -> Self {
        Self {
            present: true,
            valid: true,
            value,
        }
    }

    /// The key was missing from the source object.
    pub fn is_absent(&self) -> bool {
        !self.present
    }

    /// Present but carrying no usable value.
    pub fn is_null(&self) -> bool {
        self.present && !self.valid
    }

    /// The value, if the field is valid.
    pub fn get(&self) -> Option<&T> {
        if self.valid {
            Some(&self.value)
        } else {
            None
        }
    }

    /// Consumes the field, returning the value if valid.
    pub fn into_option(self) -> Option<T> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }

    /// Views the field as one of its three states.
    pub fn presence(&self) -> Presence<'_, T> {
        match (self.present, self.valid) {
            (_, true) => Presence::Value(&self.value),
            (true, false) => Presence::Null,
            (false, false) => Presence::Absent,
        }
    }
}

impl<T: Default> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::new(value),
            None => Self::null(),
        }
    }
}

impl<T: Literal> Nullable<T> {
    /// Decodes one field value fragment into `self`.
    ///
    /// Marks the field present before looking at the fragment, and that mark
    /// is kept when the fragment turns out to have the wrong type. A second
    /// call (duplicate key) starts again from the null state.
    ///
    /// # Example
    ///
    /// ```
    /// use json_joy_nullable::NullableFloat;
    ///
    /// let mut field = NullableFloat::absent();
    /// field.decode_fragment(b"1.5").unwrap();
    /// assert_eq!(field, NullableFloat::new(1.5));
    ///
    /// let mut field = NullableFloat::absent();
    /// assert!(field.decode_fragment(br#""wat""#).is_err());
    /// assert!(field.present && !field.valid);
    /// ```
    pub fn decode_fragment(&mut self, fragment: &[u8]) -> Result<(), TypeMismatch> {
        self.present = true;
        self.valid = false;
        self.value = T::default();

        if is_null_literal(fragment) {
            trace!("nullable field set to null");
            return Ok(());
        }

        match serde_json::from_slice::<T>(fragment) {
            Ok(value) => {
                self.value = value;
                self.valid = true;
                Ok(())
            }
            Err(err) => {
                let fragment = String::from_utf8_lossy(trim_json_ws(fragment)).into_owned();
                debug!("nullable field type mismatch: expected {}, got {fragment}", T::expected());
                Err(TypeMismatch::new(T::expected(), fragment, err.to_string()))
            }
        }
    }
}

fn trim_json_ws(bytes: &[u8]) -> &[u8] {
    let is_ws = |b: &u8| matches!(b, b' ' | b'\t' | b'\n' | b'\r');
    let start = bytes.iter().position(|b| !is_ws(b)).unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|b| !is_ws(b)).map_or(start, |i| i + 1);
    &bytes[start..end]
}

fn is_null_literal(fragment: &[u8]) -> bool {
    trim_json_ws(fragment) == b"null"
}
