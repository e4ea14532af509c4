use std::{borrow::Cow, fmt};

use time::{Date, PrimitiveDateTime, Time};

/// Driver level parameter value.
///
/// Construct via [`Encode`][crate::Encode], or directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Null,
    Text(Cow<'a, str>),
    SmallInt(i16),
    Integer(i32),
    /// Sent truncated to 32 bits.
    BigInt(i64),
    Bool(bool),
    Date(Date),
    Time(Time),
    Timestamp(PrimitiveDateTime),
    /// Default string rendering of a kind without dedicated encoding.
    ///
    /// Sent as text.
    Other(String),
}

impl Value<'_> {
    /// Create [`Value::Other`] from any displayable value.
    pub fn display(value: impl fmt::Display) -> Value<'static> {
        Value::Other(value.to_string())
    }

    /// Returns `true` if value is [`Value::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns owned value, copying borrowed text.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Null => Value::Null,
            Value::Text(text) => Value::Text(Cow::Owned(text.into_owned())),
            Value::SmallInt(v) => Value::SmallInt(v),
            Value::Integer(v) => Value::Integer(v),
            Value::BigInt(v) => Value::BigInt(v),
            Value::Bool(v) => Value::Bool(v),
            Value::Date(v) => Value::Date(v),
            Value::Time(v) => Value::Time(v),
            Value::Timestamp(v) => Value::Timestamp(v),
            Value::Other(v) => Value::Other(v),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Text(text) => f.write_str(text),
            Value::SmallInt(v) => fmt::Display::fmt(v, f),
            Value::Integer(v) => fmt::Display::fmt(v, f),
            Value::BigInt(v) => fmt::Display::fmt(v, f),
            Value::Bool(v) => fmt::Display::fmt(v, f),
            Value::Date(v) => fmt::Display::fmt(v, f),
            Value::Time(v) => fmt::Display::fmt(v, f),
            Value::Timestamp(v) => {
                let ts = v
                    .format(crate::types::time::DESCRIPTION)
                    .map_err(|_| fmt::Error)?;
                f.write_str(&ts)
            },
            Value::Other(v) => f.write_str(v),
        }
    }
}
