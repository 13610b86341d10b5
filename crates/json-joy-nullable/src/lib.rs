//! Tri-state nullable JSON fields.
//!
//! A plain `Option<T>` cannot tell a missing key from an explicit `null`.
//! [`Nullable<T>`] records both: `present` says the key appeared, `valid` says
//! it carried a usable value, and `value` holds that value (or the zero value).
//!
//! # Example
//!
//! ```
//! use json_joy_nullable::{decode_object, DecodeOptions, FieldSet, NullableFloat};
//!
//! let mut value = NullableFloat::absent();
//! let mut fields = FieldSet::new().with("value", &mut value);
//! decode_object(br#"{"value":null}"#, &mut fields, &DecodeOptions::default()).unwrap();
//! drop(fields);
//! assert!(value.present);
//! assert!(!value.valid);
//! assert_eq!(value.value, 0.0);
//! ```

pub mod error;
pub mod field;
pub mod literal;
pub mod nullable;
pub mod object;
pub mod options;
mod serde_impl;

pub use error::{DecodeError, Result, TypeMismatch};
pub use field::DecodeField;
pub use literal::Literal;
pub use nullable::{Nullable, NullableFloat, NullableFloatSlice, Presence};
pub use object::{
    decode_into, decode_into_with, decode_object, from_slice, from_str, DecodeRecord, FieldSet,
};
pub use options::DecodeOptions;
