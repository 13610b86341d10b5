//! Options for the object decoder.

/// Controls how the object decoder handles field errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Stop at the first field that fails to decode. Fields after it stay
    /// absent. When `false`, every registered field is decoded and the first
    /// failure in source order is reported.
    pub fail_fast: bool,
}

impl DecodeOptions {
    /// Default options: decode every field, report the first failure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets [`DecodeOptions::fail_fast`].
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}
