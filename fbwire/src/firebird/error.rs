//! Protocol error
use std::{fmt, str::Utf8Error};

/// An error when reading wire primitives.
pub enum ProtocolError {
    Short {
        field: &'static str,
        expect: usize,
        found: usize,
    },
    Utf8(Utf8Error),
}

impl std::error::Error for ProtocolError { }

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::Short { field, expect, found } => write!(
                f,
                "Expected {expect} bytes of {field}, found {found}"
            ),
            ProtocolError::Utf8(err) => write!(f, "Invalid utf8 text: {err}"),
        }
    }
}

impl fmt::Debug for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl ProtocolError {
    pub(crate) fn short(field: &'static str, expect: usize, found: usize) -> ProtocolError {
        Self::Short { field, expect, found }
    }

    pub(crate) fn utf8(err: Utf8Error) -> ProtocolError {
        Self::Utf8(err)
    }
}

/// Column type code that has no BLR encoding.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedType {
    pub(crate) code: u16,
    pub(crate) index: usize,
}

impl UnsupportedType {
    /// Returns the raw type code.
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// Returns the position of the column in its descriptor list.
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl std::error::Error for UnsupportedType { }

impl fmt::Display for UnsupportedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported sql type `{}` at column {}", self.code, self.index)
    }
}

impl fmt::Debug for UnsupportedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}
