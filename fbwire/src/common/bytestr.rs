use std::{fmt, str::Utf8Error};

use bytes::Bytes;

/// Utf8 text sharing a [`Bytes`] buffer.
///
/// Xdr text read from a frame and every [`Config`][crate::Config] component
/// point into the buffer they came from instead of owning a copy.
#[derive(Clone)]
pub struct ByteStr {
    /// Always valid utf8.
    bytes: Bytes,
}

impl ByteStr {
    /// Validate `bytes` as utf8 and take it without copying.
    pub fn from_utf8(bytes: Bytes) -> Result<Self, Utf8Error> {
        std::str::from_utf8(&bytes)?;
        Ok(Self { bytes })
    }

    pub fn copy_from_str(string: &str) -> Self {
        Self { bytes: Bytes::copy_from_slice(string.as_bytes()) }
    }

    pub const fn from_static(string: &'static str) -> Self {
        Self { bytes: Bytes::from_static(string.as_bytes()) }
    }

    /// Share the part of the buffer `subset` points to.
    ///
    /// # Panics
    ///
    /// Panics if `subset` is not borrowed from `self`, see [`Bytes::slice_ref`].
    pub fn slice_ref(&self, subset: &str) -> Self {
        Self { bytes: self.bytes.slice_ref(subset.as_bytes()) }
    }

    pub fn as_str(&self) -> &str {
        // SAFETY: every constructor takes a str or checks utf8
        unsafe { std::str::from_utf8_unchecked(&self.bytes) }
    }

    /// Returns the underlying buffer.
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

impl std::ops::Deref for ByteStr {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for ByteStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl From<&'static str> for ByteStr {
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

impl From<String> for ByteStr {
    fn from(value: String) -> Self {
        Self { bytes: Bytes::from(value.into_bytes()) }
    }
}
