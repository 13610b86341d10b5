//! Element kinds a [`Nullable`](crate::Nullable) can carry.

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A JSON literal type with a zero value.
///
/// `Default::default()` is the value held by a field that is absent, null, or
/// failed to decode.
pub trait Literal: Serialize + DeserializeOwned + Default {
    /// Name of the expected JSON type, used in mismatch diagnostics.
    fn expected() -> Cow<'static, str>;

    /// Rejects values JSON has no literal for, so they are never written as
    /// `null` by accident.
    fn check_encodable(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Literal for f64 {
    fn expected() -> Cow<'static, str> {
        Cow::Borrowed("number")
    }

    fn check_encodable(&self) -> Result<(), String> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(format!("non-finite number {self} has no JSON representation"))
        }
    }
}

impl<T: Literal> Literal for Vec<T> {
    fn expected() -> Cow<'static, str> {
        Cow::Owned(format!("array of {}", T::expected()))
    }

    fn check_encodable(&self) -> Result<(), String> {
        self.iter().try_for_each(T::check_encodable)
    }
}
